//! Public lookup API.
//!
//! All functions are pure: they read the given [`RuleStore`] and the input
//! name, and nothing else.

use crate::error::{Error, Result};
use crate::matcher;
use crate::store::ParseOptions;
use crate::validator::validate_syntax;
use crate::{DomainName, RuleStore};

/// Parse `name` into its trd, sld and tld.
///
/// Fails with [`Error::DomainInvalid`] when `name` is absent or not a
/// syntactically valid hostname, and with [`Error::DomainNotAllowed`] when
/// the whole name is a public suffix with no registrable label in front.
///
/// # Examples
/// ```
/// use k2suffix::{parse, Error, ParseOptions, RuleStore, Section};
///
/// let store = RuleStore::from_entries([(Section::Icann, "uk"), (Section::Icann, "co.uk")]).unwrap();
///
/// let name = parse(&store, "foo.VeryBritish.co.uk", ParseOptions::default()).unwrap();
/// assert_eq!(name.parts(), (Some("foo"), "verybritish", "co.uk"));
///
/// assert!(matches!(parse(&store, "co.uk", ParseOptions::default()), Err(Error::DomainNotAllowed(_))));
/// assert!(matches!(parse(&store, None::<&str>, ParseOptions::default()), Err(Error::DomainInvalid(_))));
/// ```
pub fn parse<'n>(
    store: &RuleStore,
    name: impl Into<Option<&'n str>>,
    options: ParseOptions,
) -> Result<DomainName> {
    let raw = name
        .into()
        .ok_or_else(|| Error::DomainInvalid("name is absent".to_string()))?;
    let labels: Vec<String> = validate_syntax(raw)?
        .into_iter()
        .map(str::to_ascii_lowercase)
        .collect();
    let labels: Vec<&str> = labels.iter().map(String::as_str).collect();

    let suffix_len = matcher::suffix_len(store, &labels, options.include_private);
    DomainName::from_labels(&labels[..], suffix_len)
        .ok_or_else(|| Error::DomainNotAllowed(raw.to_string()))
}

/// Registrable domain (`sld.tld`) of `name`, or `None` if it doesn't parse.
///
/// Private rules are consulted unless `ignore_private` is set.
///
/// # Examples
/// ```
/// use k2suffix::{domain, RuleStore, Section};
///
/// let store = RuleStore::from_entries([
///     (Section::Icann, "com"),
///     (Section::Private, "blogspot.com"),
/// ])
/// .unwrap();
///
/// assert_eq!(domain(&store, "foo.blogspot.com", false).as_deref(), Some("foo.blogspot.com"));
/// assert_eq!(domain(&store, "foo.blogspot.com", true).as_deref(), Some("blogspot.com"));
/// assert_eq!(domain(&store, "blogspot.com", false), None);
/// ```
pub fn domain<'n>(
    store: &RuleStore,
    name: impl Into<Option<&'n str>>,
    ignore_private: bool,
) -> Option<String> {
    parse(store, name, ParseOptions::ignore_private(ignore_private))
        .ok()
        .map(|parsed| parsed.domain())
}

/// Whether `name` parses under `options`.
pub fn is_valid<'n>(
    store: &RuleStore,
    name: impl Into<Option<&'n str>>,
    options: ParseOptions,
) -> bool {
    parse(store, name, options).is_ok()
}
