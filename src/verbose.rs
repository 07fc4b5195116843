//! Opt-in diagnostic output
//!
//! A `VerboseLog` is created from the run configuration and passed to
//! whatever needs to report diagnostics.

use std::fmt::Display;

use console::style;

#[derive(Debug, Clone, Copy, Default)]
pub struct VerboseLog {
    enabled: bool,
}

impl VerboseLog {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn log(&self, message: impl Display) {
        if self.enabled {
            eprintln!("{} {}", style("›").dim(), style(message).dim());
        }
    }

    /// Log a heading followed by one indented line per item
    pub fn list<I>(&self, heading: impl Display, items: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        if !self.enabled {
            return;
        }
        self.log(heading);
        for item in items {
            eprintln!("    {}", style(item).dim());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        assert!(!VerboseLog::default().is_enabled());
        assert!(VerboseLog::new(true).is_enabled());
    }
}
