use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::Version;
use crate::error::Deps2MermaidError;

/// An interval of acceptable versions
///
/// `max == None` means the range is unbounded above; such a range is never
/// `max_inclusive`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRange {
    pub min: Version,
    pub max: Option<Version>,
    pub min_inclusive: bool,
    pub max_inclusive: bool,
}

impl VersionRange {
    pub fn new(
        min: Version,
        max: Option<Version>,
        min_inclusive: bool,
        max_inclusive: bool,
    ) -> Self {
        let max_inclusive = max_inclusive && max.is_some();
        Self {
            min,
            max,
            min_inclusive,
            max_inclusive,
        }
    }

    /// `[v,v]`
    pub fn exact(version: Version) -> Self {
        Self::new(version.clone(), Some(version), true, true)
    }

    /// `[v,)`
    pub fn minimal(version: Version) -> Self {
        Self::new(version, None, true, false)
    }

    /// Pin an open-ended range to its lower bound. Bounded ranges are returned
    /// unchanged.
    pub fn minimal_to_exact(self) -> Self {
        match self.max {
            None => Self::exact(self.min),
            Some(_) => self,
        }
    }

    /// Whether this range admits exactly one version
    pub fn is_exact(&self) -> bool {
        self.min_inclusive && self.max_inclusive && self.max.as_ref() == Some(&self.min)
    }

    /// Ordering used when displaying a collection of ranges
    pub fn compare_by_minimum(a: &Self, b: &Self) -> Ordering {
        a.min.cmp(&b.min)
    }

    /// Parse a range written as a bare version (`1.0.0`), with comparison
    /// operators (`>= 1.0.0 < 2.0.0`) or in interval notation
    /// (`[1.0.0,2.0.0)`).
    pub fn parse(value: &str) -> Result<Self, Deps2MermaidError> {
        let trimmed = value.trim();
        let Some(first) = trimmed.chars().next() else {
            return Err(Deps2MermaidError::invalid_range(value, "empty range"));
        };

        if first.is_ascii_digit() {
            return Ok(Self::exact(Version::parse(trimmed)?));
        }

        if matches!(first, '>' | '<' | '=') {
            return Self::parse_operator_style(trimmed);
        }

        Self::parse_interval(trimmed)
    }

    fn parse_operator_style(value: &str) -> Result<Self, Deps2MermaidError> {
        let mut min = None;
        let mut max = None;
        let mut min_inclusive = false;
        let mut max_inclusive = false;

        let mut tokens = value.split_whitespace();
        while let Some(token) = tokens.next() {
            let split = token
                .find(|c: char| !matches!(c, '<' | '>' | '='))
                .unwrap_or(token.len());
            let (operator, rest) = token.split_at(split);
            let operand = if rest.is_empty() {
                tokens.next().ok_or_else(|| {
                    Deps2MermaidError::invalid_range(
                        value,
                        format!("operator '{operator}' has no version"),
                    )
                })?
            } else {
                rest
            };

            match operator {
                ">" | ">=" => {
                    min = Some(Version::parse(operand)?);
                    min_inclusive = operator == ">=";
                }
                "<" | "<=" => {
                    max = Some(Version::parse(operand)?);
                    max_inclusive = operator == "<=";
                }
                "=" => {
                    let version = Version::parse(operand)?;
                    min = Some(version.clone());
                    max = Some(version);
                    min_inclusive = true;
                    max_inclusive = true;
                }
                other => {
                    return Err(Deps2MermaidError::invalid_range(
                        value,
                        format!("unknown comparison operator '{other}'"),
                    ));
                }
            }
        }

        let min = min
            .ok_or_else(|| Deps2MermaidError::invalid_range(value, "range has no lower bound"))?;
        Ok(Self::new(min, max, min_inclusive, max_inclusive))
    }

    fn parse_interval(value: &str) -> Result<Self, Deps2MermaidError> {
        let min_inclusive = match value.chars().next() {
            Some('[') => true,
            Some('(') => false,
            _ => {
                return Err(Deps2MermaidError::invalid_range(
                    value,
                    "expected '[' or '(' at the start",
                ));
            }
        };
        let max_inclusive = match value.chars().last() {
            Some(']') if value.len() > 1 => true,
            Some(')') if value.len() > 1 => false,
            _ => {
                return Err(Deps2MermaidError::invalid_range(
                    value,
                    "expected ']' or ')' at the end",
                ));
            }
        };

        let inner = &value[1..value.len() - 1];
        let (min_text, max_text) = match inner.split_once(',') {
            Some((min, max)) => (min, Some(max.trim())),
            None => (inner, None),
        };

        let min = Version::parse(min_text.trim())?;
        let max = match max_text {
            None | Some("") => None,
            Some(text) => Some(Version::parse(text)?),
        };

        Ok(Self::new(min, max, min_inclusive, max_inclusive))
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.min_inclusive { '[' } else { '(' };
        match &self.max {
            None => write!(f, "{open}{},)", self.min),
            Some(_) if self.is_exact() => write!(f, "{}", self.min),
            Some(max) => {
                let close = if self.max_inclusive { ']' } else { ')' };
                write!(f, "{open}{},{max}{close}", self.min)
            }
        }
    }
}

impl FromStr for VersionRange {
    type Err = Deps2MermaidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    #[test]
    fn test_parse_canonical_forms() {
        for value in ["1.0.0", "[1.0.0,)", "(1.0.0,)", "[1.2.3,2)", "[1.2.3,2.3.4]", "(1.0,2.0)"] {
            let range = VersionRange::parse(value).unwrap();
            assert_eq!(range.to_string(), value);
        }
    }

    #[test]
    fn test_parse_normalizes() {
        let cases = [
            (" [1.2.3, 2.0.0) ", "[1.2.3,2.0.0)"),
            (">= 2.0.0", "[2.0.0,)"),
            (">= 1.2.3 < 2.0.0", "[1.2.3,2.0.0)"),
            (">1.0 <=2.0", "(1.0,2.0]"),
            ("= 3.1.4", "3.1.4"),
            ("[1.0.0, ]", "[1.0.0,)"),
            ("[1.0.0,1.0.0]", "1.0.0"),
        ];

        for (input, expected) in cases {
            assert_eq!(VersionRange::parse(input).unwrap().to_string(), expected, "{input}");
        }
    }

    #[test]
    fn test_bare_version_is_exact() {
        let range = VersionRange::parse("4.7.1").unwrap();
        assert_eq!(range, VersionRange::exact(v("4.7.1")));
        assert!(range.is_exact());
    }

    #[test]
    fn test_interval_without_comma_is_unbounded() {
        let range = VersionRange::parse("[1.0.0]").unwrap();
        assert_eq!(range.max, None);
        assert!(!range.max_inclusive);
    }

    #[test]
    fn test_operator_style_requires_lower_bound() {
        assert!(VersionRange::parse("< 2.0.0").is_err());
        assert!(VersionRange::parse("<= 2.0.0").is_err());
    }

    #[test]
    fn test_operator_style_rejects_garbage() {
        assert!(VersionRange::parse(">= ").is_err());
        assert!(VersionRange::parse(">= abc").is_err());
        assert!(VersionRange::parse("=> 1.0").is_err());
    }

    #[test]
    fn test_foreign_syntax_is_rejected() {
        for value in ["", "   ", "abc", "{1.0,2.0}", "[1.0,2.0", "1.0,2.0]", "[", "[abc,)", "[1.0,abc)"] {
            assert!(
                matches!(
                    VersionRange::parse(value),
                    Err(Deps2MermaidError::InvalidVersionRange { .. }
                        | Deps2MermaidError::InvalidVersion { .. })
                ),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_round_trip_of_constructed_ranges() {
        let ranges = [
            VersionRange::exact(v("1.2.3")),
            VersionRange::minimal(v("1.2.3-beta")),
            VersionRange::new(v("1.0"), Some(v("2.0")), false, true),
            VersionRange::new(v("1.0.0"), Some(v("1.5.*")), true, false),
            VersionRange::new(v("1.0.0"), None, false, false),
        ];

        for range in ranges {
            assert_eq!(VersionRange::parse(&range.to_string()).unwrap(), range);
        }
    }

    #[test]
    fn test_minimal_to_exact() {
        let pinned = VersionRange::minimal(v("6.0.0")).minimal_to_exact();
        assert_eq!(pinned, VersionRange::exact(v("6.0.0")));
        assert_eq!(pinned.to_string(), "6.0.0");

        let bounded = VersionRange::parse("[1.0,2.0)").unwrap();
        assert_eq!(bounded.clone().minimal_to_exact(), bounded);
    }

    #[test]
    fn test_compare_by_minimum() {
        let mut ranges = vec![
            VersionRange::parse("[2.0.0,)").unwrap(),
            VersionRange::parse("1.5.0").unwrap(),
            VersionRange::parse("[1.0.0,2.0.0)").unwrap(),
        ];
        ranges.sort_by(VersionRange::compare_by_minimum);

        let rendered: Vec<String> = ranges.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["[1.0.0,2.0.0)", "1.5.0", "[2.0.0,)"]);
    }
}
