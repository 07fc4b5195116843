//! Edge filtering by component name

use regex::Regex;

use crate::common::compile_pattern;
use crate::config::FilterOptions;
use crate::core::Dependency;
use crate::error::Deps2MermaidError;

/// Decides which edges make it into the rendered graph
///
/// An edge is kept when either endpoint matches `include`, both match
/// `strong_include`, they do not both match `weak_exclude`, and neither
/// matches `exclude`. Unset include patterns match everything; unset exclude
/// patterns match nothing.
#[derive(Debug, Clone, Default)]
pub struct EdgeFilter {
    include: Option<Regex>,
    strong_include: Option<Regex>,
    exclude: Option<Regex>,
    weak_exclude: Option<Regex>,
}

impl EdgeFilter {
    /// A filter that accepts every edge
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: &FilterOptions) -> Result<Self, Deps2MermaidError> {
        let compile = |option: &str, pattern: &Option<String>| {
            pattern
                .as_deref()
                .map(|pattern| compile_pattern(option, pattern))
                .transpose()
        };

        Ok(Self {
            include: compile("--filter", &options.include)?,
            strong_include: compile("--strong-filter", &options.strong_include)?,
            exclude: compile("--exclude", &options.exclude)?,
            weak_exclude: compile("--weak-exclude", &options.weak_exclude)?,
        })
    }

    pub fn with_include(mut self, pattern: Regex) -> Self {
        self.include = Some(pattern);
        self
    }

    pub fn with_strong_include(mut self, pattern: Regex) -> Self {
        self.strong_include = Some(pattern);
        self
    }

    pub fn with_exclude(mut self, pattern: Regex) -> Self {
        self.exclude = Some(pattern);
        self
    }

    pub fn with_weak_exclude(mut self, pattern: Regex) -> Self {
        self.weak_exclude = Some(pattern);
        self
    }

    pub fn accepts(&self, dependency: &Dependency) -> bool {
        let from = dependency.from_name();
        let to = dependency.to_name();

        let included = matches_or(&self.include, from, true) || matches_or(&self.include, to, true);
        let strongly_included = matches_or(&self.strong_include, from, true)
            && matches_or(&self.strong_include, to, true);
        let weakly_excluded = matches_or(&self.weak_exclude, from, false)
            && matches_or(&self.weak_exclude, to, false);
        let excluded =
            matches_or(&self.exclude, from, false) || matches_or(&self.exclude, to, false);

        included && strongly_included && !weakly_excluded && !excluded
    }
}

fn matches_or(pattern: &Option<Regex>, name: &str, unset: bool) -> bool {
    pattern.as_ref().map_or(unset, |pattern| pattern.is_match(name))
}
