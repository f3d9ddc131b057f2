//! Parsed domain names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A hostname split at its public suffix.
///
/// For `www.example.co.uk` under the rule `co.uk`:
/// - `tld` is `co.uk` (the public suffix),
/// - `sld` is `example` (the registrable label),
/// - `trd` is `www` (everything further left, if anything).
///
/// All parts are lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainName {
    tld: String,
    sld: String,
    trd: Option<String>,
}

impl DomainName {
    /// Create a domain name from its parts.
    pub fn new(
        tld: impl Into<String>,
        sld: impl Into<String>,
        trd: Option<impl Into<String>>,
    ) -> Self {
        Self {
            tld: tld.into(),
            sld: sld.into(),
            trd: trd.map(Into::into),
        }
    }

    /// Split lower-cased `labels` so that the last `suffix_len` labels form
    /// the tld.
    ///
    /// Returns `None` unless at least one label is left of the suffix.
    pub(crate) fn from_labels<S: AsRef<str>>(labels: &[S], suffix_len: usize) -> Option<Self> {
        if suffix_len == 0 || labels.len() <= suffix_len {
            return None;
        }
        let split = labels.len() - suffix_len;
        let join = |parts: &[S]| {
            parts
                .iter()
                .map(|part| part.as_ref())
                .collect::<Vec<&str>>()
                .join(".")
        };

        let trd = &labels[..split - 1];
        Some(Self {
            tld: join(&labels[split..]),
            sld: labels[split - 1].as_ref().to_string(),
            trd: (!trd.is_empty()).then(|| join(trd)),
        })
    }

    /// The public suffix, e.g. `co.uk`.
    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// The registrable label directly left of the suffix.
    pub fn sld(&self) -> &str {
        &self.sld
    }

    /// Labels left of the sld, if any.
    pub fn trd(&self) -> Option<&str> {
        self.trd.as_deref()
    }

    /// The registrable domain: `sld.tld`.
    pub fn domain(&self) -> String {
        format!("{}.{}", self.sld, self.tld)
    }

    /// The full name: `trd.sld.tld`.
    pub fn name(&self) -> String {
        match &self.trd {
            Some(trd) => format!("{}.{}", trd, self.domain()),
            None => self.domain(),
        }
    }

    /// The registrable domain with one more label in front, when the name
    /// has a trd. For `a.b.example.com` this is `b.example.com`.
    pub fn subdomain(&self) -> Option<String> {
        let trd = self.trd.as_deref()?;
        let last = trd.rsplit('.').next().unwrap_or(trd);
        Some(format!("{}.{}", last, self.domain()))
    }

    /// Whether the name has labels left of the registrable domain.
    pub fn is_subdomain(&self) -> bool {
        self.trd.is_some()
    }

    /// The `(trd, sld, tld)` triple.
    pub fn parts(&self) -> (Option<&str>, &str, &str) {
        (self.trd(), self.sld(), self.tld())
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(trd) = &self.trd {
            write!(f, "{}.", trd)?;
        }
        write!(f, "{}.{}", self.sld, self.tld)
    }
}
