//! Lookup options.

use serde::{Deserialize, Serialize};

/// Options controlling how a name is matched against a [`RuleStore`].
///
/// [`RuleStore`]: crate::RuleStore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Take rules from the private section into account
    pub include_private: bool,
}

impl ParseOptions {
    /// Create options with an explicit private-section flag.
    pub fn new(include_private: bool) -> Self {
        Self { include_private }
    }

    /// Create options from the inverse `ignore_private` flag.
    pub fn ignore_private(ignore_private: bool) -> Self {
        Self::new(!ignore_private)
    }

    /// Options that consult ICANN rules only.
    pub fn icann_only() -> Self {
        Self::new(false)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_private: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_includes_private() {
        assert!(ParseOptions::default().include_private);
        assert!(!ParseOptions::icann_only().include_private);
    }

    #[test]
    fn test_ignore_private() {
        assert_eq!(ParseOptions::ignore_private(true), ParseOptions::new(false));
        assert_eq!(ParseOptions::ignore_private(false), ParseOptions::new(true));
    }

    #[test]
    fn test_deserialize() {
        let opts: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ParseOptions::default());

        let opts: ParseOptions = serde_json::from_str(r#"{"include_private":false}"#).unwrap();
        assert!(!opts.include_private);
    }
}
