//! # Manifest Module
//!
//! Finds the `project.assets.json` files written by `dotnet restore` and
//! turns each into a list of dependency edges plus the project it belongs to.

mod assets;
mod discovery;

use std::path::{Path, PathBuf};

pub use assets::{OrderedMap, ProjectAssets};
pub use discovery::ManifestDiscovery;
use indicatif::{ParallelProgressIterator, ProgressBar};
use miette::WrapErr;
use rayon::prelude::*;

use crate::core::{Component, Dependency};
use crate::error::Deps2MermaidError;

/// The edges recovered from one assets file
#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: PathBuf,
    /// The restored project, when the file names one
    pub root: Option<Component>,
    /// Package edges first, then the project's own requirements
    pub dependencies: Vec<Dependency>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, Deps2MermaidError> {
        let assets = ProjectAssets::parse_file(path)?;
        Self::from_assets(path, &assets)
    }

    pub fn from_assets(path: &Path, assets: &ProjectAssets) -> Result<Self, Deps2MermaidError> {
        let root = assets.project_component()?;
        let mut dependencies = assets.target_dependencies()?;

        let requirements = assets.project_requirements()?;
        if !requirements.is_empty() {
            let project = root
                .clone()
                .ok_or_else(|| Deps2MermaidError::MissingProjectRoot {
                    path: path.to_path_buf(),
                })?;
            dependencies.extend(
                requirements
                    .into_iter()
                    .map(|reference| Dependency::new(project.clone(), reference)),
            );
        }

        Ok(Self {
            path: path.to_path_buf(),
            root,
            dependencies,
        })
    }

    pub fn require_root(&self) -> Result<&Component, Deps2MermaidError> {
        self.root
            .as_ref()
            .ok_or_else(|| Deps2MermaidError::MissingProjectRoot {
                path: self.path.clone(),
            })
    }
}

/// Load every manifest in parallel, keeping input order
pub fn load_manifests(paths: &[PathBuf], progress: &ProgressBar) -> miette::Result<Vec<Manifest>> {
    paths
        .par_iter()
        .progress_with(progress.clone())
        .map(|path| {
            Manifest::load(path)
                .wrap_err_with(|| format!("Failed to load manifest '{}'", path.display()))
        })
        .collect()
}
