//! Rule kind definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RuleKind represents how a rule's labels are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Plain rule (`co.uk`): matches exactly its labels
    Normal,
    /// Wildcard rule (`*.ke`): the leftmost position matches any one label
    Wildcard,
    /// Exception rule (`!nic.ck`): carves a registrable label out of a wildcard
    Exception,
}

impl RuleKind {
    /// Detect the kind from raw rule text by its leading marker.
    pub fn detect(s: &str) -> Self {
        if s.starts_with('!') {
            RuleKind::Exception
        } else if s.starts_with('*') {
            RuleKind::Wildcard
        } else {
            RuleKind::Normal
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Normal => "normal",
            RuleKind::Wildcard => "wildcard",
            RuleKind::Exception => "exception",
        }
    }

    /// Number of input labels a rule of this kind covers, given its
    /// explicit label count.
    pub fn match_len(self, explicit: usize) -> usize {
        match self {
            RuleKind::Normal | RuleKind::Exception => explicit,
            RuleKind::Wildcard => explicit + 1,
        }
    }

    /// Number of trailing labels that form the public suffix once a rule
    /// of this kind has matched.
    pub fn suffix_len(self, explicit: usize) -> usize {
        match self {
            RuleKind::Normal => explicit,
            RuleKind::Wildcard => explicit + 1,
            RuleKind::Exception => explicit.saturating_sub(1),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(RuleKind::detect("co.uk"), RuleKind::Normal);
        assert_eq!(RuleKind::detect("*.ke"), RuleKind::Wildcard);
        assert_eq!(RuleKind::detect("*"), RuleKind::Wildcard);
        assert_eq!(RuleKind::detect("!nic.ck"), RuleKind::Exception);
    }

    #[test]
    fn test_lengths() {
        assert_eq!(RuleKind::Normal.match_len(2), 2);
        assert_eq!(RuleKind::Normal.suffix_len(2), 2);
        assert_eq!(RuleKind::Wildcard.match_len(1), 2);
        assert_eq!(RuleKind::Wildcard.suffix_len(1), 2);
        assert_eq!(RuleKind::Wildcard.suffix_len(0), 1);
        assert_eq!(RuleKind::Exception.match_len(2), 2);
        assert_eq!(RuleKind::Exception.suffix_len(2), 1);
    }
}
