//! Codec configuration.
//!
//! # Configuration
//!
//! - `CODEC_ENUM_MATCHING`: `strict` or `case_insensitive` (default: `strict`)
//! - `CODEC_MAX_DEPTH`: Maximum nesting depth before encoding is aborted (default: 64)
//! - `CODEC_PRETTY`: Pretty-print serialized output (default: `false`)
//!
//! # Enum matching
//!
//! Enum members are always written in SCREAMING_SNAKE_CASE (`"ACTIVE"`,
//! `"BIWEEKLY_ODD"`). When decoding:
//!
//! - `strict` accepts only that exact spelling; `"active"` is rejected
//! - `case_insensitive` normalizes the stored text before matching
//!
//! # Example
//!
//! ```ignore
//! use academia_config::{CodecConfig, EnumMatching};
//!
//! let config = CodecConfig::default().with_enum_matching(EnumMatching::CaseInsensitive);
//! ```

use std::fmt;
use std::str::FromStr;

/// Default maximum nesting depth for encoder traversal.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How stored enum names are matched against declared members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnumMatching {
    /// Only the exact SCREAMING_SNAKE_CASE name matches.
    #[default]
    Strict,
    /// Names are upper-cased before matching.
    CaseInsensitive,
}

impl fmt::Display for EnumMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::CaseInsensitive => write!(f, "case_insensitive"),
        }
    }
}

impl FromStr for EnumMatching {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "case_insensitive" | "case-insensitive" | "insensitive" => Ok(Self::CaseInsensitive),
            other => Err(format!("unknown enum matching mode '{}'", other)),
        }
    }
}

/// Configuration for the tagged JSON codec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// How enum names are matched when decoding.
    pub enum_matching: EnumMatching,

    /// Nesting depth at which encoding is aborted.
    ///
    /// Depth counts path segments, list indices included. A student's deepest
    /// leaf is `grades.0.course.time_slots.0.day`, six segments, so hitting
    /// this limit means the input references itself.
    pub max_depth: usize,

    /// Pretty-print serialized text.
    pub pretty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            enum_matching: EnumMatching::Strict,
            max_depth: DEFAULT_MAX_DEPTH,
            pretty: false,
        }
    }
}

impl CodecConfig {
    /// Creates a new `CodecConfig` from environment variables.
    ///
    /// Falls back to default values if environment variables are not set
    /// or cannot be parsed.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            enum_matching: lookup("CODEC_ENUM_MATCHING")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            max_depth: lookup("CODEC_MAX_DEPTH")
                .and_then(|v| v.parse().ok())
                .filter(|depth| *depth > 0)
                .unwrap_or(DEFAULT_MAX_DEPTH),
            pretty: lookup("CODEC_PRETTY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    #[must_use]
    pub fn with_enum_matching(mut self, enum_matching: EnumMatching) -> Self {
        self.enum_matching = enum_matching;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.enum_matching, EnumMatching::Strict);
        assert_eq!(config.max_depth, 64);
        assert!(!config.pretty);
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = CodecConfig::from_lookup(lookup_from(&[
            ("CODEC_ENUM_MATCHING", "case_insensitive"),
            ("CODEC_MAX_DEPTH", "12"),
            ("CODEC_PRETTY", "true"),
        ]));
        assert_eq!(config.enum_matching, EnumMatching::CaseInsensitive);
        assert_eq!(config.max_depth, 12);
        assert!(config.pretty);
    }

    #[test]
    fn test_from_lookup_falls_back_on_garbage() {
        let config = CodecConfig::from_lookup(lookup_from(&[
            ("CODEC_ENUM_MATCHING", "sometimes"),
            ("CODEC_MAX_DEPTH", "0"),
            ("CODEC_PRETTY", "yes please"),
        ]));
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_enum_matching_parse() {
        assert_eq!("STRICT".parse::<EnumMatching>(), Ok(EnumMatching::Strict));
        assert_eq!(
            "case-insensitive".parse::<EnumMatching>(),
            Ok(EnumMatching::CaseInsensitive)
        );
        assert!("loose".parse::<EnumMatching>().is_err());
        assert_eq!(EnumMatching::CaseInsensitive.to_string(), "case_insensitive");
    }

    #[test]
    fn test_builder_methods() {
        let config = CodecConfig::default()
            .with_enum_matching(EnumMatching::CaseInsensitive)
            .with_max_depth(8)
            .with_pretty(true);
        assert_eq!(config.enum_matching, EnumMatching::CaseInsensitive);
        assert_eq!(config.max_depth, 8);
        assert!(config.pretty);
    }
}
