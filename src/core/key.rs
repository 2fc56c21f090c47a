//! Dotted translation keys (`admin.dashboard.title`).

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a string is not a valid dotted key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid translation key \"{0}\": segments must be non-empty")]
pub struct InvalidKey(pub String);

/// A translation key split into its path segments.
///
/// Segments are never empty and their order defines the nesting depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DottedKey {
    segments: Vec<String>,
}

impl DottedKey {
    /// Parse a key such as `admin.dashboard.title`.
    pub fn parse(key: &str) -> Result<Self, InvalidKey> {
        let segments: Vec<String> = key.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(InvalidKey(key.to_string()));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The leading segment, which doubles as the locale file family prefix.
    pub fn domain(&self) -> &str {
        &self.segments[0]
    }

    /// Drop the leading segment when it equals `domain`.
    ///
    /// Locale files named `<domain>.*` omit the domain level, so
    /// `admin.dashboard.title` is stored as `dashboard: title:` inside
    /// `admin.en_US.neon`. A key made of the domain alone is returned as is,
    /// and stripping a key that lacks the prefix is a no-op.
    pub fn strip_domain(&self, domain: &str) -> DottedKey {
        if self.segments.len() > 1 && self.segments[0] == domain {
            DottedKey {
                segments: self.segments[1..].to_vec(),
            }
        } else {
            self.clone()
        }
    }

    /// Prefix the key with a namespace from a `{translator}` scope.
    pub fn with_namespace(&self, namespace: &DottedKey) -> DottedKey {
        let mut segments = namespace.segments.clone();
        segments.extend(self.segments.iter().cloned());
        DottedKey { segments }
    }
}

impl fmt::Display for DottedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for DottedKey {
    type Err = InvalidKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
