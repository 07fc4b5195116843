//! Graph run configuration

use std::path::PathBuf;

use super::{FilterOptions, ZoomOptions};
use crate::cli::{GraphDirection, OutputType};
use crate::error::Deps2MermaidError;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub paths: Vec<String>,
    pub output_type: OutputType,
    pub output: Option<PathBuf>,
    pub direction: GraphDirection,
    pub zoom: ZoomOptions,
    pub filter: FilterOptions,
    pub verbose: bool,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    paths: Option<Vec<String>>,
    output_type: Option<OutputType>,
    output: Option<Option<PathBuf>>,
    direction: Option<GraphDirection>,
    zoom: Option<ZoomOptions>,
    filter: Option<FilterOptions>,
    verbose: Option<bool>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self {
            paths: None,
            output_type: None,
            output: None,
            direction: None,
            zoom: None,
            filter: None,
            verbose: None,
        }
    }

    pub fn with_paths(mut self, paths: Vec<String>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = Some(output_type);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_direction(mut self, direction: GraphDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_zoom(mut self, zoom: ZoomOptions) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn with_filter(mut self, filter: FilterOptions) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }
}

fn missing(field: &str) -> Deps2MermaidError {
    Deps2MermaidError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, Deps2MermaidError> {
        let paths = self.paths.ok_or_else(|| missing("paths"))?;
        if paths.is_empty() {
            return Err(Deps2MermaidError::ConfigurationError {
                message: "At least one input path is required".to_string(),
            });
        }

        Ok(GraphOptions {
            paths,
            output_type: self.output_type.ok_or_else(|| missing("output_type"))?,
            output: self.output.ok_or_else(|| missing("output"))?,
            direction: self.direction.unwrap_or_default(),
            zoom: self.zoom.unwrap_or_default(),
            filter: self.filter.unwrap_or_default(),
            verbose: self.verbose.unwrap_or(false),
        })
    }
}
