//! Suffix rule value type.

mod kind;

pub use kind::RuleKind;

use once_cell::sync::Lazy;
use std::fmt;

use crate::error::RuleFormatError;
use crate::Section;

/// Bucket key used for rules without explicit labels (the bare `*` rule).
pub(crate) const ANY_LABEL: &str = "*";

/// The implicit `*` rule applied when nothing in the store matches.
static DEFAULT_RULE: Lazy<Rule> = Lazy::new(|| Rule {
    kind: RuleKind::Wildcard,
    labels: Vec::new(),
    section: Section::Icann,
});

/// A single public suffix rule.
///
/// Labels are stored lower-cased in left-to-right order without the `*.` or
/// `!` marker, so `*.kawasaki.jp` keeps `["kawasaki", "jp"]`.
///
/// # Examples
/// ```
/// use k2suffix::{Rule, RuleKind, Section};
///
/// let rule = Rule::parse("*.ke", Section::Icann).unwrap();
/// assert_eq!(rule.kind(), RuleKind::Wildcard);
/// assert!(rule.matches(&["nic", "ke"]));
/// assert!(!rule.matches(&["ke"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    kind: RuleKind,
    labels: Vec<String>,
    section: Section,
}

impl Rule {
    /// Parse a rule from its list notation (`com`, `*.ke`, `!nic.ck`).
    pub fn parse(text: &str, section: Section) -> Result<Self, RuleFormatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RuleFormatError::EmptyRule);
        }

        let kind = RuleKind::detect(text);
        let body = match kind {
            RuleKind::Exception => {
                let body = &text[1..];
                if body.is_empty() {
                    return Err(RuleFormatError::EmptyException(text.to_string()));
                }
                body
            }
            RuleKind::Wildcard if text == ANY_LABEL => "",
            RuleKind::Wildcard => text
                .strip_prefix("*.")
                .ok_or_else(|| RuleFormatError::MisplacedWildcard(text.to_string()))?,
            RuleKind::Normal => text,
        };

        if body.contains('*') {
            return Err(RuleFormatError::MisplacedWildcard(text.to_string()));
        }

        let labels = if body.is_empty() {
            Vec::new()
        } else {
            body.split('.')
                .map(|label| parse_label(label, text))
                .collect::<Result<Vec<_>, _>>()?
        };

        if kind == RuleKind::Exception && labels.len() < 2 {
            return Err(RuleFormatError::ExceptionTooShort(text.to_string()));
        }

        Ok(Self {
            kind,
            labels,
            section,
        })
    }

    /// Build a rule from pre-split labels.
    ///
    /// Labels are lower-cased and must not carry the `*.` or `!` markers:
    /// `kind` alone decides how the rule matches. An exception needs at
    /// least two labels.
    pub fn new<I, S>(kind: RuleKind, labels: I, section: Section) -> Result<Self, RuleFormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = labels.into_iter().map(|l| l.as_ref().to_string()).collect();
        let text = raw.join(".");

        if raw.is_empty() {
            match kind {
                RuleKind::Normal => return Err(RuleFormatError::EmptyRule),
                RuleKind::Exception => return Err(RuleFormatError::EmptyException(text)),
                RuleKind::Wildcard => {}
            }
        }

        let labels = raw
            .iter()
            .map(|label| {
                if label.contains(['.', '*']) {
                    return Err(RuleFormatError::InvalidLabel(text.clone()));
                }
                parse_label(label, &text)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if kind == RuleKind::Exception && labels.len() < 2 {
            return Err(RuleFormatError::ExceptionTooShort(text));
        }

        Ok(Self {
            kind,
            labels,
            section,
        })
    }

    /// The implicit default rule (`*`): the last label is the suffix.
    pub fn default_rule() -> &'static Rule {
        &DEFAULT_RULE
    }

    /// Get the kind of this rule.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Get the section this rule belongs to.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Get the explicit labels of this rule (markers excluded).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of input labels this rule covers when it matches.
    pub fn match_len(&self) -> usize {
        self.kind.match_len(self.labels.len())
    }

    /// Number of trailing labels that form the public suffix when this rule
    /// governs a name.
    pub fn suffix_len(&self) -> usize {
        self.kind.suffix_len(self.labels.len())
    }

    /// Whether this is the bare `*` rule.
    pub fn is_default(&self) -> bool {
        self.kind == RuleKind::Wildcard && self.labels.is_empty()
    }

    /// Check whether this rule matches the right end of `labels`.
    ///
    /// `labels` must already be lower-cased.
    pub fn matches<S: AsRef<str>>(&self, labels: &[S]) -> bool {
        if labels.len() < self.match_len() {
            return false;
        }
        let tail = &labels[labels.len() - self.labels.len()..];
        tail.iter()
            .zip(&self.labels)
            .all(|(input, own)| input.as_ref() == own)
    }

    /// Key of the store bucket holding this rule: its top-level label.
    pub(crate) fn bucket_key(&self) -> &str {
        self.labels.last().map(String::as_str).unwrap_or(ANY_LABEL)
    }
}

fn parse_label(label: &str, rule: &str) -> Result<String, RuleFormatError> {
    if label.is_empty() {
        return Err(RuleFormatError::EmptyLabel(rule.to_string()));
    }
    if label
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || c == '!')
    {
        return Err(RuleFormatError::InvalidLabel(rule.to_string()));
    }
    Ok(label.to_ascii_lowercase())
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RuleKind::Normal => {}
            RuleKind::Exception => f.write_str("!")?,
            RuleKind::Wildcard if self.labels.is_empty() => return f.write_str(ANY_LABEL),
            RuleKind::Wildcard => f.write_str("*.")?,
        }
        f.write_str(&self.labels.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icann(text: &str) -> Rule {
        Rule::parse(text, Section::Icann).unwrap()
    }

    #[test]
    fn test_parse_normal() {
        let rule = icann("Co.UK");
        assert_eq!(rule.kind(), RuleKind::Normal);
        assert_eq!(rule.labels(), ["co", "uk"]);
        assert_eq!(rule.suffix_len(), 2);
        assert_eq!(rule.to_string(), "co.uk");
    }

    #[test]
    fn test_parse_wildcard() {
        let rule = icann("*.kawasaki.jp");
        assert_eq!(rule.kind(), RuleKind::Wildcard);
        assert_eq!(rule.labels(), ["kawasaki", "jp"]);
        assert_eq!(rule.match_len(), 3);
        assert_eq!(rule.suffix_len(), 3);
        assert_eq!(rule.to_string(), "*.kawasaki.jp");
    }

    #[test]
    fn test_parse_exception() {
        let rule = icann("!city.kawasaki.jp");
        assert_eq!(rule.kind(), RuleKind::Exception);
        assert_eq!(rule.match_len(), 3);
        assert_eq!(rule.suffix_len(), 2);
        assert_eq!(rule.to_string(), "!city.kawasaki.jp");
    }

    #[test]
    fn test_parse_bare_wildcard() {
        let rule = icann("*");
        assert!(rule.is_default());
        assert_eq!(rule.bucket_key(), "*");
        assert_eq!(&rule, Rule::default_rule());
    }

    #[test]
    fn test_invalid_rules() {
        let parse = |s: &str| Rule::parse(s, Section::Icann).unwrap_err();

        assert_eq!(parse(""), RuleFormatError::EmptyRule);
        assert_eq!(parse("   "), RuleFormatError::EmptyRule);
        assert!(matches!(parse("!"), RuleFormatError::EmptyException(_)));
        assert!(matches!(parse("!ck"), RuleFormatError::ExceptionTooShort(_)));
        assert!(matches!(parse("foo.*.jp"), RuleFormatError::MisplacedWildcard(_)));
        assert!(matches!(parse("*foo.jp"), RuleFormatError::MisplacedWildcard(_)));
        assert!(matches!(parse("!*.jp"), RuleFormatError::MisplacedWildcard(_)));
        assert!(matches!(parse("*.*.jp"), RuleFormatError::MisplacedWildcard(_)));
        assert!(matches!(parse("co..uk"), RuleFormatError::EmptyLabel(_)));
        assert!(matches!(parse(".uk"), RuleFormatError::EmptyLabel(_)));
        assert!(matches!(parse("a!b.uk"), RuleFormatError::InvalidLabel(_)));
    }

    #[test]
    fn test_new_from_labels() {
        let rule = Rule::new(RuleKind::Wildcard, ["KE"], Section::Private).unwrap();
        assert_eq!(rule.to_string(), "*.ke");
        assert_eq!(rule.section(), Section::Private);

        let err = Rule::new(RuleKind::Exception, ["ck"], Section::Icann).unwrap_err();
        assert!(matches!(err, RuleFormatError::ExceptionTooShort(_)));

        let err = Rule::new(RuleKind::Normal, Vec::<&str>::new(), Section::Icann).unwrap_err();
        assert_eq!(err, RuleFormatError::EmptyRule);

        let rule = Rule::new(RuleKind::Wildcard, Vec::<&str>::new(), Section::Icann).unwrap();
        assert!(rule.is_default());
    }

    #[test]
    fn test_new_keeps_kind_and_rejects_markers() {
        let rule = Rule::new(RuleKind::Exception, ["www", "ck"], Section::Icann).unwrap();
        assert_eq!(rule.kind(), RuleKind::Exception);
        assert_eq!(rule, icann("!www.ck"));

        let err = Rule::new(RuleKind::Normal, ["!foo", "bar"], Section::Icann).unwrap_err();
        assert!(matches!(err, RuleFormatError::InvalidLabel(_)));

        let err = Rule::new(RuleKind::Normal, ["*", "jp"], Section::Icann).unwrap_err();
        assert!(matches!(err, RuleFormatError::InvalidLabel(_)));

        let err = Rule::new(RuleKind::Normal, ["co.uk"], Section::Icann).unwrap_err();
        assert!(matches!(err, RuleFormatError::InvalidLabel(_)));
    }

    #[test]
    fn test_new_rejects_padded_labels() {
        let err = Rule::new(RuleKind::Normal, [" com "], Section::Icann).unwrap_err();
        assert!(matches!(err, RuleFormatError::InvalidLabel(_)));

        let err = Rule::new(RuleKind::Normal, ["co", "", "uk"], Section::Icann).unwrap_err();
        assert!(matches!(err, RuleFormatError::EmptyLabel(_)));
    }

    #[test]
    fn test_labels_fold_ascii_only() {
        let rule = icann("BÜCHER.De");
        assert_eq!(rule.labels(), ["bÜcher", "de"]);
    }

    #[test]
    fn test_matches() {
        let normal = icann("co.uk");
        assert!(normal.matches(&["co", "uk"]));
        assert!(normal.matches(&["foo", "co", "uk"]));
        assert!(!normal.matches(&["uk"]));
        assert!(!normal.matches(&["foo", "uk"]));

        let wildcard = icann("*.ke");
        assert!(wildcard.matches(&["nic", "ke"]));
        assert!(wildcard.matches(&["www", "nic", "ke"]));
        assert!(!wildcard.matches(&["ke"]));

        let exception = icann("!www.ck");
        assert!(exception.matches(&["www", "ck"]));
        assert!(exception.matches(&["foo", "www", "ck"]));
        assert!(!exception.matches(&["other", "ck"]));

        assert!(Rule::default_rule().matches(&["anything"]));
        assert!(!Rule::default_rule().matches::<&str>(&[]));
    }
}
