//! Configuration constants for deps2mermaid
//!
//! Fixed values shared by the manifest loader, the output modes and the
//! progress display.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
}

/// Manifest discovery
pub mod manifest {
    /// File written by `dotnet restore`
    pub const ASSETS_FILE_NAME: &str = "project.assets.json";

    /// Directory, relative to a project, holding the assets file
    pub const INTERMEDIATE_DIR: &str = "obj";

    /// Directories never descended into during recursive discovery
    pub const SKIPPED_DIRS: &[&str] = &[".git", "node_modules"];
}

/// Hosted Mermaid viewer endpoints
pub mod viewer {
    /// Rendered PNG of a payload
    pub const IMAGE_URL_PREFIX: &str = "https://mermaid.ink/img/";

    /// Interactive editor for a payload
    pub const LIVE_EDIT_URL_PREFIX: &str = "https://mermaid.live/edit#pako:";

    /// Viewer theme stored in the payload
    pub const THEME_CONFIG: &str = r#"{"theme": "dark"}"#;
}

/// Output formatting configuration
pub mod output {
    /// Default output type when not specified
    pub const DEFAULT_OUTPUT_TYPE: &str = "mermaid";

    /// Default graph direction when not specified
    pub const DEFAULT_DIRECTION: &str = "LR";
}
