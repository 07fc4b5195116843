use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON in '{file}'")]
#[diagnostic(
    code(deps2mermaid::manifest_parse_error),
    help("Run `dotnet restore` to regenerate the assets file, or check the JSON near the highlighted position")
)]
pub struct ManifestParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum Deps2MermaidError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(deps2mermaid::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParseError(Box<ManifestParseError>),

    #[error("Invalid version '{value}'")]
    #[diagnostic(
        code(deps2mermaid::invalid_version),
        help("Versions look like `1.2.3`, `1.2`, `1.*` or `1.2.3-beta`")
    )]
    InvalidVersion { value: String },

    #[error("Invalid version range '{value}': {reason}")]
    #[diagnostic(
        code(deps2mermaid::invalid_version_range),
        help("Use NuGet interval notation such as `[1.0.0,2.0.0)` or operators such as `>= 1.0.0`")
    )]
    InvalidVersionRange { value: String, reason: String },

    #[error("Invalid package coordinate '{value}'")]
    #[diagnostic(
        code(deps2mermaid::invalid_coordinate),
        help("Library keys in project.assets.json must have the form `Name/Version`")
    )]
    InvalidCoordinate { value: String },

    #[error("No project root found in '{path}'")]
    #[diagnostic(
        code(deps2mermaid::missing_project_root),
        help("The assets file needs `project.version` and `project.restore.projectName`")
    )]
    MissingProjectRoot { path: PathBuf },

    #[error("Invalid regular expression for {option}: '{pattern}'")]
    #[diagnostic(
        code(deps2mermaid::invalid_pattern),
        help("Patterns use Rust regex syntax, see https://docs.rs/regex")
    )]
    InvalidPattern {
        option: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(deps2mermaid::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(deps2mermaid::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(deps2mermaid::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(deps2mermaid::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },
}

impl Deps2MermaidError {
    pub(crate) fn invalid_range(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidVersionRange {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
