use std::collections::HashSet;
use std::path::{Path, PathBuf};

use console::style;
use walkdir::WalkDir;

use crate::constants::manifest::{ASSETS_FILE_NAME, INTERMEDIATE_DIR, SKIPPED_DIRS};

/// Resolves user-supplied paths to assets files
///
/// - `dir/*` searches `dir` recursively
/// - a file path is taken as the assets file itself
/// - a directory is a project whose assets file sits in `obj/`
#[derive(Debug, Default)]
pub struct ManifestDiscovery {
    seen: HashSet<PathBuf>,
    unresolved: Vec<String>,
}

impl ManifestDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every assets file found, without duplicates, in input order
    pub fn discover_all(&mut self, inputs: &[String]) -> Vec<PathBuf> {
        let mut manifests = Vec::new();

        for input in inputs {
            let found = match input.strip_suffix('*') {
                Some(base) => self.search(base),
                None => self.resolve(Path::new(input)),
            };

            if found.is_empty() {
                eprintln!(
                    "{} No {} found for '{}'",
                    style("⚠").yellow(),
                    ASSETS_FILE_NAME,
                    input
                );
                self.unresolved.push(input.clone());
            }
            manifests.extend(found);
        }

        manifests
    }

    /// Inputs that did not lead to any assets file
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    fn search(&mut self, base: &str) -> Vec<PathBuf> {
        let root = if base.is_empty() { Path::new(".") } else { Path::new(base) };

        let mut found: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name();
                !SKIPPED_DIRS.iter().any(|skipped| name == *skipped)
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && e.file_name() == ASSETS_FILE_NAME)
            .map(|e| e.into_path())
            .collect();

        // Sort by path for consistent output
        found.sort();
        found.retain(|path| self.seen.insert(path.clone()));
        found
    }

    fn resolve(&mut self, path: &Path) -> Vec<PathBuf> {
        let candidate = if path.is_file() {
            path.to_path_buf()
        } else if path.is_dir() {
            path.join(INTERMEDIATE_DIR).join(ASSETS_FILE_NAME)
        } else {
            return Vec::new();
        };

        if candidate.is_file() && self.seen.insert(candidate.clone()) {
            vec![candidate]
        } else {
            Vec::new()
        }
    }
}
