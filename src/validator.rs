//! Hostname syntax validation.
//!
//! Validation is purely syntactic and runs before any rule lookup, so a
//! rejected name is rejected under every rule set.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Maximum length of a single label in bytes.
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum length of a full name in bytes.
pub const MAX_NAME_LEN: usize = 253;

/// Letters (including pre-decoded IDN text), digits and inner hyphens.
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{M}\p{Nd}](?:[\p{L}\p{M}\p{Nd}-]*[\p{L}\p{M}\p{Nd}])?$")
        .expect("label pattern is a valid regex")
});

/// Check the syntax of `raw` and split it into labels.
///
/// Rejects blank input, URI-shaped input (anything containing `://`),
/// empty labels (doubled, leading or trailing dots), labels with characters
/// other than letters, digits and hyphens, labels starting or ending with a
/// hyphen, and names or labels over the DNS length limits.
///
/// # Examples
/// ```
/// use k2suffix::validate_syntax;
///
/// assert_eq!(validate_syntax("www.Example.com").unwrap(), ["www", "Example", "com"]);
/// assert!(validate_syntax("http://example.com").is_err());
/// assert!(validate_syntax("foo.co..uk").is_err());
/// ```
pub fn validate_syntax(raw: &str) -> Result<Vec<&str>> {
    if raw.trim().is_empty() {
        return Err(invalid(raw, "name is blank"));
    }
    if raw.contains("://") {
        return Err(invalid(raw, "name looks like a URI"));
    }
    if raw.len() > MAX_NAME_LEN {
        return Err(invalid(raw, "name is too long"));
    }

    let labels: Vec<&str> = raw.split('.').collect();
    for label in &labels {
        check_label(label).map_err(|reason| invalid(raw, reason))?;
    }

    Ok(labels)
}

fn check_label(label: &str) -> std::result::Result<(), &'static str> {
    if label.is_empty() {
        return Err("empty label");
    }
    if label.len() > MAX_LABEL_LEN {
        return Err("label is too long");
    }
    if LABEL_PATTERN.is_match(label) {
        return Ok(());
    }
    if label.starts_with('-') || label.ends_with('-') {
        Err("label starts or ends with a hyphen")
    } else {
        Err("label contains invalid characters")
    }
}

fn invalid(raw: &str, reason: &str) -> Error {
    Error::DomainInvalid(format!("{:?}: {}", raw, reason))
}
