use std::cmp::Ordering;
use std::fmt;

/// One numeric segment of a [`Version`](super::Version)
///
/// Segments that were not written (`1.2` has no patch), wildcards (`1.*`) and
/// text that is not a number are kept apart from real numbers instead of being
/// folded into magic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VersionPart {
    Number(u32),
    #[default]
    Absent,
    Wildcard,
    Invalid,
}

impl VersionPart {
    /// Parse a single segment. Never fails: unparseable text becomes
    /// [`VersionPart::Invalid`].
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "" => VersionPart::Absent,
            "*" => VersionPart::Wildcard,
            digits => digits
                .parse::<u32>()
                .map(VersionPart::Number)
                .unwrap_or(VersionPart::Invalid),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, VersionPart::Number(_))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, VersionPart::Wildcard)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, VersionPart::Invalid)
    }

    /// Value used for ordering; anything that is not a number sorts as zero.
    pub fn comparison_value(&self) -> u32 {
        match self {
            VersionPart::Number(n) => *n,
            _ => 0,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            VersionPart::Number(_) => 0,
            VersionPart::Absent => 1,
            VersionPart::Wildcard => 2,
            VersionPart::Invalid => 3,
        }
    }
}

impl Ord for VersionPart {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparison_value()
            .cmp(&other.comparison_value())
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for VersionPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u32> for VersionPart {
    fn from(value: u32) -> Self {
        VersionPart::Number(value)
    }
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionPart::Number(n) => write!(f, "{n}"),
            VersionPart::Absent => Ok(()),
            VersionPart::Wildcard => f.write_str("*"),
            VersionPart::Invalid => f.write_str("?"),
        }
    }
}
