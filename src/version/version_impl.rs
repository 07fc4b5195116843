use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::VersionPart;
use crate::error::Deps2MermaidError;

/// A NuGet package version: three segments plus an optional pre-release tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: VersionPart,
    pub minor: VersionPart,
    pub patch: VersionPart,
    pub tag: Option<String>,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self::from_parts(major.into(), minor.into(), patch.into(), None)
    }

    pub fn from_parts(
        major: VersionPart,
        minor: VersionPart,
        patch: VersionPart,
        tag: Option<&str>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            tag: tag.map(str::to_string),
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn parts(&self) -> [VersionPart; 3] {
        [self.major, self.minor, self.patch]
    }

    pub fn is_prerelease(&self) -> bool {
        self.tag.is_some()
    }

    /// Parse `major[.minor[.patch]][-tag]`, returning `None` for anything
    /// malformed. Segments past the third are ignored.
    pub fn try_parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        let (numbers, tag) = match value.split_once('-') {
            Some((numbers, tag)) => (numbers, Some(tag)),
            None => (value, None),
        };

        let mut parts = [VersionPart::Absent; 3];
        for (slot, text) in parts.iter_mut().zip(numbers.split('.')) {
            *slot = VersionPart::parse(text);
        }
        if parts.iter().any(VersionPart::is_invalid) {
            return None;
        }

        let [major, minor, patch] = parts;
        Some(Self::from_parts(major, minor, patch, tag))
    }

    /// Like [`Version::try_parse`] but reports malformed input as an error
    pub fn parse(value: &str) -> Result<Self, Deps2MermaidError> {
        Self::try_parse(value).ok_or_else(|| Deps2MermaidError::InvalidVersion {
            value: value.to_string(),
        })
    }
}

fn compare_tags(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        // a release sorts after any of its pre-releases
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .comparison_value()
            .cmp(&other.major.comparison_value())
            .then_with(|| {
                self.minor
                    .comparison_value()
                    .cmp(&other.minor.comparison_value())
            })
            .then_with(|| {
                self.patch
                    .comparison_value()
                    .cmp(&other.patch.comparison_value())
            })
            .then_with(|| compare_tags(self.tag.as_deref(), other.tag.as_deref()))
            // `1.2` and `1.2.0` are distinct values; keep the order total
            .then_with(|| self.parts().cmp(&other.parts()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self.parts();
        let mut segments: Vec<String> = parts
            .iter()
            .take_while(|part| part.is_present())
            .map(ToString::to_string)
            .collect();
        if parts.iter().any(VersionPart::is_wildcard) {
            segments.push("*".to_string());
        }

        f.write_str(&segments.join("."))?;
        if let Some(tag) = &self.tag {
            write!(f, "-{tag}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Deps2MermaidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips() {
        for value in ["1.0.0", "1.0.0-test", "1.0.0-*", "1.*", "1.0.*", "1.2", "2"] {
            let version = Version::try_parse(value).unwrap();
            assert_eq!(version.to_string(), value);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Version::try_parse("1.0.z").is_none());
        assert!(Version::try_parse("abc").is_none());
        assert!(Version::try_parse("").is_none());
        assert!(Version::try_parse("   ").is_none());
        assert!(matches!(
            Version::parse("abc"),
            Err(Deps2MermaidError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_parse_pads_missing_segments() {
        let version = Version::parse("1.2").unwrap();
        assert_eq!(version.major, VersionPart::Number(1));
        assert_eq!(version.minor, VersionPart::Number(2));
        assert_eq!(version.patch, VersionPart::Absent);
        assert_eq!(version.tag, None);
    }

    #[test]
    fn test_parse_splits_tag_on_first_dash() {
        let version = Version::parse("1.2.3-beta-2").unwrap();
        assert_eq!(version.tag.as_deref(), Some("beta-2"));
        assert_eq!(version.to_string(), "1.2.3-beta-2");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Version::parse(" 2.0.0 ").unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_display_of_constructed_versions() {
        use VersionPart::*;

        let cases = [
            (Version::new(1, 0, 0), "1.0.0"),
            (
                Version::from_parts(Number(1), Wildcard, Number(123), None),
                "1.*",
            ),
            (
                Version::from_parts(Number(1), Number(2), Wildcard, None),
                "1.2.*",
            ),
            (
                Version::from_parts(Number(1), Number(2), Wildcard, Some("abc")),
                "1.2.*-abc",
            ),
            (Version::new(1, 2, 3).with_tag("*"), "1.2.3-*"),
            (
                Version::from_parts(Number(1), Number(2), Absent, None),
                "1.2",
            ),
            (
                Version::from_parts(Number(1), Number(2), Invalid, None),
                "1.2",
            ),
        ];

        for (version, expected) in cases {
            assert_eq!(version.to_string(), expected);
        }
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(Version::new(1, 0, 0) < Version::new(1, 0, 1));
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 99));
        assert!(Version::new(2, 0, 0) > Version::new(1, 99, 99));
    }

    #[test]
    fn test_release_sorts_after_prerelease() {
        let release = Version::new(1, 0, 0);
        let prerelease = Version::new(1, 0, 0).with_tag("rc1");
        assert!(release > prerelease);
        assert!(prerelease < release);
        assert!(Version::new(1, 0, 0).with_tag("alpha") < Version::new(1, 0, 0).with_tag("beta"));
    }

    #[test]
    fn test_absent_and_wildcard_sort_as_zero() {
        let short = Version::parse("1.2").unwrap();
        let star = Version::parse("1.2.*").unwrap();
        assert!(short < Version::new(1, 2, 1));
        assert!(star < Version::new(1, 2, 1));
        assert!(short > Version::new(1, 1, 9));
    }

    #[test]
    fn test_ordering_is_total_and_consistent_with_eq() {
        let versions: Vec<Version> = ["1.2", "1.2.0", "1.2.*", "1.2.0-rc", "1.2.0", "0.9"]
            .iter()
            .map(|v| Version::parse(v).unwrap())
            .collect();

        for a in &versions {
            for b in &versions {
                let ord = a.cmp(b);
                assert_eq!(ord == Ordering::Equal, a == b, "{a} vs {b}");
                assert_eq!(ord.reverse(), b.cmp(a));
            }
        }
    }
}
