//! Edge filter configuration

use crate::common::FilterArgs;

/// Name patterns restricting which edges are rendered
///
/// Every pattern is optional; see
/// [`EdgeFilter`](crate::dependency_filter::EdgeFilter) for how unset
/// patterns behave.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Keep edges where either end matches
    pub include: Option<String>,
    /// Keep edges only where both ends match
    pub strong_include: Option<String>,
    /// Drop edges where either end matches
    pub exclude: Option<String>,
    /// Drop edges only where both ends match
    pub weak_exclude: Option<String>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<FilterArgs> for FilterOptions {
    fn from(args: FilterArgs) -> Self {
        Self {
            include: args.filter,
            strong_include: args.strong_filter,
            exclude: args.exclude,
            weak_exclude: args.weak_exclude,
        }
    }
}
