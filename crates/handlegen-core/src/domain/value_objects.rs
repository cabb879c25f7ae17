//! Domain value objects: UsernameLength.
//!
//! # Design
//!
//! Pure value types: `Copy`, equality-by-value, no identity. Each type
//! defines its string representation, a strict `FromStr` parser for
//! configuration values, and (where the generator must never reject input)
//! a lenient parser with a fallback.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── UsernameLength ──────────────────────────────────────────────────────────

/// Length class of a generated username.
///
/// Each class maps to a maximum character budget; candidates are clipped to
/// it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsernameLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl UsernameLength {
    /// Every class, shortest first.
    pub const ALL: [Self; 3] = [Self::Short, Self::Medium, Self::Long];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Maximum number of characters a candidate may have.
    pub const fn budget(&self) -> usize {
        match self {
            Self::Short => 8,
            Self::Medium => 12,
            Self::Long => 18,
        }
    }

    /// Parse without ever failing: anything unrecognised is `Medium`.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for UsernameLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsernameLength {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" | "s" => Ok(Self::Short),
            "medium" | "m" => Ok(Self::Medium),
            "long" | "l" => Ok(Self::Long),
            other => Err(DomainError::InvalidLength {
                value: other.to_string(),
            }),
        }
    }
}
