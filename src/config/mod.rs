//! # Configuration Module
//!
//! Immutable configuration for a graph run, built from the parsed command line
//! through builders so that the executor never looks at clap types.
//!
//! - **GraphOptions**: everything a run needs, from input paths to output mode
//! - **ZoomOptions**: which packages to zoom in on and how far to look
//! - **FilterOptions**: the four edge name patterns
//!
//! ## Example
//!
//! ```
//! use deps2mermaid::cli::{GraphDirection, OutputType};
//! use deps2mermaid::common::ConfigBuilder;
//! use deps2mermaid::config::{FilterOptions, GraphOptions, ZoomOptions, ZoomSeed};
//!
//! let options = GraphOptions::builder()
//!     .with_paths(vec!["src/App".to_string()])
//!     .with_output_type(OutputType::Url)
//!     .with_output(None)
//!     .with_direction(GraphDirection::TopDown)
//!     .with_zoom(ZoomOptions::new(ZoomSeed::Pattern("^Serilog".into()), Some(1), None))
//!     .with_filter(FilterOptions::default())
//!     .with_verbose(false)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.zoom.depth_bounds().to_string(), "forward 1, backward 0");
//! ```

pub mod filter;
pub mod graph;
pub mod zoom;

pub use filter::FilterOptions;
pub use graph::{GraphOptions, GraphOptionsBuilder};
pub use zoom::{ZoomOptions, ZoomSeed};
