//! Suffix list sections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Section represents which part of the suffix list a rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Section {
    /// Delegations made by ICANN registries, always active
    #[default]
    Icann = 0,
    /// Suffixes contributed by organizations, active only on request
    Private = 1,
}

impl Section {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Icann => "ICANN",
            Section::Private => "PRIVATE",
        }
    }

    /// Whether rules in this section take part in a lookup.
    pub fn is_active(self, include_private: bool) -> bool {
        match self {
            Section::Icann => true,
            Section::Private => include_private,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
