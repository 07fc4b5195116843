//! # NuGet Version Model
//!
//! Versions and version ranges as they appear in `project.assets.json`.
//!
//! - **VersionPart**: one segment, which may be a number, missing, a wildcard
//!   or unparseable
//! - **Version**: three segments plus an optional pre-release tag, totally
//!   ordered with releases sorting after their pre-releases
//! - **VersionRange**: an interval over versions, parsed from interval
//!   notation (`[1.0,2.0)`), comparison operators (`>= 1.0 < 2.0`) or a bare
//!   version
//!
//! ## Example
//!
//! ```
//! use deps2mermaid::version::{Version, VersionRange};
//!
//! let range = VersionRange::parse(">= 1.2.3 < 2.0.0").unwrap();
//! assert_eq!(range.to_string(), "[1.2.3,2.0.0)");
//!
//! let pinned = VersionRange::parse(">= 6.0.0").unwrap().minimal_to_exact();
//! assert_eq!(pinned.to_string(), "6.0.0");
//!
//! assert!(Version::parse("1.0.0").unwrap() > Version::parse("1.0.0-rc.1").unwrap());
//! assert!(Version::try_parse("1.0.z").is_none());
//! ```

mod part;
mod range;
mod version_impl;

pub use part::VersionPart;
pub use range::VersionRange;
pub use version_impl::Version;
