use std::fmt;

use clap::{Parser, ValueEnum};

use crate::common::{FilterArgs, OutputArgs, ZoomArgs};

#[derive(Parser, Debug)]
#[command(
    name = "deps2mermaid",
    about = "🧜 Turn NuGet project.assets.json files into Mermaid dependency graphs",
    long_about = "deps2mermaid reads the project.assets.json files that `dotnet restore` writes \
                  into obj/, builds the package dependency graph with every version range seen \
                  for each package, and renders it as a Mermaid flowchart. The graph can be \
                  zoomed to the neighbourhood of selected packages, filtered by name, and \
                  emitted as text, a mermaid.ink image link, a mermaid.live edit link, or a \
                  Markdown snippet.",
    version
)]
pub struct Cli {
    /// Project directories, assets files, or `dir/*` for a recursive search
    #[arg(value_name = "PATH", value_delimiter = ',', env = "DEPS2MERMAID_PATHS")]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub zoom: ZoomArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Print diagnostics to stderr
    #[arg(short, long, env = "DEPS2MERMAID_VERBOSE")]
    pub verbose: bool,
}

impl Cli {
    /// Input paths, defaulting to the current directory
    pub fn get_paths(&self) -> Vec<String> {
        if self.paths.is_empty() {
            vec![".".to_string()]
        } else {
            self.paths.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputType {
    /// Mermaid graph text
    Mermaid,
    /// Markdown image linked to the live editor
    Markdown,
    /// mermaid.live edit link
    Url,
    /// mermaid.ink image link
    Image,
    /// Open the live editor in the default browser
    Live,
}

impl OutputType {
    /// Whether this mode needs the compressed payload
    pub fn needs_payload(self) -> bool {
        !matches!(self, OutputType::Mermaid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GraphDirection {
    /// Left to right
    #[default]
    #[value(name = "LR")]
    LeftRight,
    /// Right to left
    #[value(name = "RL")]
    RightLeft,
    /// Top down
    #[value(name = "TD")]
    TopDown,
    /// Bottom to top
    #[value(name = "BT")]
    BottomTop,
}

impl fmt::Display for GraphDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GraphDirection::LeftRight => "LR",
            GraphDirection::RightLeft => "RL",
            GraphDirection::TopDown => "TD",
            GraphDirection::BottomTop => "BT",
        })
    }
}
