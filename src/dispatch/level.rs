//! # Severity levels used as dispatch keys.
//!
//! [`Level`] is a closed set of three keys. It deliberately has no ordering:
//! `Info` is not "less than" `Warning`, a handler registered for one level is
//! never reached by a publish at another.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseLevelError;

/// Severity level a handler is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Routine information.
    Info,
    /// Something unexpected that did not stop the caller.
    Warning,
    /// A failure the caller should act on.
    Error,
}

impl Level {
    /// Number of levels; size of the dispatcher's handler table.
    pub const COUNT: usize = 3;

    /// All levels in table order.
    pub const ALL: [Level; Level::COUNT] = [Level::Info, Level::Warning, Level::Error];

    /// Slot of this level in the handler table.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Level::Info => 0,
            Level::Warning => 1,
            Level::Error => 2,
        }
    }

    /// Lowercase name (`"info"`, `"warning"`, `"error"`).
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    /// Capitalized name used as a line prefix by console output.
    #[inline]
    pub const fn title(self) -> &'static str {
        match self {
            Level::Info => "Info",
            Level::Warning => "Warning",
            Level::Error => "Error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Case-insensitive; accepts `warn` as an alias for `warning`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_cover_table() {
        for (slot, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.index(), slot);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("INFO".parse::<Level>(), Ok(Level::Info));
        assert_eq!(" Warn ".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
    }

    #[test]
    fn test_parse_unknown_level() {
        let err = "debug".parse::<Level>().unwrap_err();
        assert_eq!(err.input, "debug");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Level::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let back: Level = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(back, Level::Error);
    }

    #[test]
    fn test_display_and_title() {
        assert_eq!(Level::Info.to_string(), "info");
        assert_eq!(Level::Error.title(), "Error");
    }
}
