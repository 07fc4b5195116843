//! Typed view of `project.assets.json`
//!
//! Only the parts needed to recover dependency edges are modelled; every
//! other property of the file is ignored.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::core::{Component, Dependency, Reference};
use crate::error::{Deps2MermaidError, ManifestParseError};
use crate::version::{Version, VersionRange};

/// A JSON object kept as key/value pairs in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssets {
    /// Target framework -> `Name/Version` -> library
    #[serde(default)]
    pub targets: OrderedMap<OrderedMap<TargetLibrary>>,
    /// Target framework -> `"Name <range>"` entries
    #[serde(default)]
    pub project_file_dependency_groups: OrderedMap<Vec<String>>,
    pub project: Option<ProjectSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetLibrary {
    #[serde(default)]
    pub dependencies: OrderedMap<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSection {
    pub version: Option<String>,
    pub restore: Option<RestoreSection>,
    #[serde(default)]
    pub frameworks: OrderedMap<FrameworkSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSection {
    pub project_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrameworkSection {
    #[serde(default)]
    pub dependencies: OrderedMap<FrameworkDependency>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrameworkDependency {
    pub version: Option<String>,
}

impl ProjectAssets {
    pub fn parse_file(path: &Path) -> Result<Self, Deps2MermaidError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Deps2MermaidError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&path.display().to_string(), &content)
    }

    /// Parse manifest text; `name` labels the source in diagnostics
    pub fn parse_str(name: &str, content: &str) -> Result<Self, Deps2MermaidError> {
        serde_json::from_str(content).map_err(|e| {
            let span = offset_of(content, e.line(), e.column())
                .map(|offset| SourceSpan::new(offset.into(), usize::from(offset < content.len())));

            Deps2MermaidError::ManifestParseError(Box::new(ManifestParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    /// The project the file was restored for, if the file names one
    pub fn project_component(&self) -> Result<Option<Component>, Deps2MermaidError> {
        let Some(project) = &self.project else {
            return Ok(None);
        };
        let name = project
            .restore
            .as_ref()
            .and_then(|restore| restore.project_name.as_deref());

        match (name, project.version.as_deref()) {
            (Some(name), Some(version)) => {
                Ok(Some(Component::new(name, Version::parse(version)?)))
            }
            _ => Ok(None),
        }
    }

    /// Edges between resolved packages, framework by framework
    pub fn target_dependencies(&self) -> Result<Vec<Dependency>, Deps2MermaidError> {
        let mut dependencies = Vec::new();

        for libraries in self.targets.values() {
            for (key, library) in libraries.iter() {
                let component = Component::parse(key)?;
                for (name, range) in library.dependencies.iter() {
                    dependencies.push(Dependency::new(
                        component.clone(),
                        Reference::new(name, VersionRange::parse(range)?),
                    ));
                }
            }
        }

        Ok(dependencies)
    }

    /// Packages the project itself asks for, with minimum-only ranges
    /// collapsed to exact ones
    ///
    /// Read from `projectFileDependencyGroups`, or from the per-framework
    /// dependency lists of `project` when that is absent or empty.
    pub fn project_requirements(&self) -> Result<Vec<Reference>, Deps2MermaidError> {
        let mut requirements = Vec::new();

        if !self.project_file_dependency_groups.is_empty() {
            for entry in self.project_file_dependency_groups.values().flatten() {
                let entry = entry.trim();
                let Some((name, range)) = entry.split_once(' ') else {
                    continue;
                };
                let range = range.trim();
                if range.is_empty() {
                    continue;
                }
                requirements.push(Reference::new(
                    name,
                    VersionRange::parse(range)?.minimal_to_exact(),
                ));
            }
            return Ok(requirements);
        }

        let Some(project) = &self.project else {
            return Ok(requirements);
        };
        for framework in project.frameworks.values() {
            for (name, dependency) in framework.dependencies.iter() {
                if let Some(range) = dependency.version.as_deref() {
                    requirements.push(Reference::new(
                        name,
                        VersionRange::parse(range)?.minimal_to_exact(),
                    ));
                }
            }
        }

        Ok(requirements)
    }
}

/// Byte offset of a 1-based line/column position
fn offset_of(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(content.len()))
}
