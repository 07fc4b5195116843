//! Zoom configuration

use crate::common::ZoomArgs;
use crate::graph::DepthBounds;

/// Which nodes a zoom starts from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ZoomSeed {
    /// No zoom: the whole graph is rendered
    #[default]
    All,
    /// Every node whose name matches the pattern
    Pattern(String),
    /// The root project of every loaded manifest
    ProjectRoot,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoomOptions {
    pub seed: ZoomSeed,
    pub forward: Option<usize>,
    pub backward: Option<usize>,
}

impl ZoomOptions {
    pub fn new(seed: ZoomSeed, forward: Option<usize>, backward: Option<usize>) -> Self {
        Self {
            seed,
            forward,
            backward,
        }
    }

    pub fn is_active(&self) -> bool {
        self.seed != ZoomSeed::All
    }

    pub fn depth_bounds(&self) -> DepthBounds {
        DepthBounds::from_options(self.forward, self.backward)
    }
}

impl From<ZoomArgs> for ZoomOptions {
    fn from(args: ZoomArgs) -> Self {
        let seed = match (args.zoom, args.project_root) {
            (Some(pattern), _) => ZoomSeed::Pattern(pattern),
            (None, true) => ZoomSeed::ProjectRoot,
            (None, false) => ZoomSeed::All,
        };
        Self::new(seed, args.forward, args.backward)
    }
}
