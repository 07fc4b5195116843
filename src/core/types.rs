//! Core type definitions
//!
//! The values the manifest reader produces and the graph consumes: resolved
//! components, unresolved references and the dependency edges between them.

use std::fmt;

use crate::error::Deps2MermaidError;
use crate::version::{Version, VersionRange};

/// A concrete, version-resolved package or project
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    pub name: String,
    pub version: Version,
}

impl Component {
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// Parse a `Name/Version` library key
    pub fn parse(value: &str) -> Result<Self, Deps2MermaidError> {
        let (name, version) =
            value
                .split_once('/')
                .ok_or_else(|| Deps2MermaidError::InvalidCoordinate {
                    value: value.to_string(),
                })?;
        Ok(Self::new(name, Version::parse(version)?))
    }

    /// The component seen as a requirement pinned to its own version
    pub fn to_reference(&self) -> Reference {
        Reference::new(self.name.clone(), VersionRange::exact(self.version.clone()))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// An unresolved requirement on a package
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub name: String,
    pub version_range: VersionRange,
}

impl Reference {
    pub fn new(name: impl Into<String>, version_range: VersionRange) -> Self {
        Self {
            name: name.into(),
            version_range,
        }
    }

    /// Parse a `Name/Range` pair
    pub fn parse(value: &str) -> Result<Self, Deps2MermaidError> {
        let (name, range) =
            value
                .split_once('/')
                .ok_or_else(|| Deps2MermaidError::InvalidCoordinate {
                    value: value.to_string(),
                })?;
        Ok(Self::new(name, VersionRange::parse(range)?))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version_range)
    }
}

/// One edge: `component` depends on something satisfying `reference`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
    pub component: Component,
    pub reference: Reference,
}

impl Dependency {
    pub fn new(component: Component, reference: Reference) -> Self {
        Self {
            component,
            reference,
        }
    }

    pub fn from_name(&self) -> &str {
        &self.component.name
    }

    pub fn to_name(&self) -> &str {
        &self.reference.name
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.component, self.reference)
    }
}
