//! Immutable rule storage.

mod config;

pub use config::ParseOptions;

use ahash::AHashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, RuleFormatError};
use crate::list::ListParser;
use crate::rule::{Rule, ANY_LABEL};
use crate::{api, DomainName, Section};

/// Rules of one section, bucketed by their top-level label.
#[derive(Debug, Default)]
struct Partition {
    buckets: AHashMap<String, Vec<Rule>>,
    len: usize,
}

impl Partition {
    /// Insert a rule, ignoring exact duplicates.
    fn insert(&mut self, rule: Rule) -> bool {
        let bucket = self.buckets.entry(rule.bucket_key().to_string()).or_default();
        if bucket.contains(&rule) {
            return false;
        }
        bucket.push(rule);
        self.len += 1;
        true
    }

    /// Rules ending in `last`, followed by the bare `*` rules.
    fn candidates<'a>(&'a self, last: &str) -> impl Iterator<Item = &'a Rule> + 'a {
        let any = if last == ANY_LABEL {
            None
        } else {
            self.buckets.get(ANY_LABEL)
        };
        self.buckets
            .get(last)
            .into_iter()
            .chain(any)
            .flatten()
    }

    fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.buckets.values().flatten()
    }
}

/// RuleStore holds every suffix rule, split into the ICANN and the private
/// section.
///
/// The store is built once and never changes afterwards, so a single
/// instance can be shared across threads (for example behind an `Arc`)
/// without locking.
///
/// # Examples
/// ```
/// use k2suffix::{ParseOptions, RuleStore, Section};
///
/// let store = RuleStore::from_entries([
///     (Section::Icann, "com"),
///     (Section::Icann, "co.uk"),
///     (Section::Private, "blogspot.com"),
/// ])
/// .unwrap();
///
/// let name = store.parse("www.example.co.uk", ParseOptions::default()).unwrap();
/// assert_eq!(name.domain(), "example.co.uk");
/// ```
#[derive(Debug, Default)]
pub struct RuleStore {
    icann: Partition,
    private: Partition,
}

impl RuleStore {
    /// Create a store from already-built rules.
    ///
    /// Each rule lands in the partition of its own section.
    pub fn new<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        let mut store = Self::default();
        let mut duplicates = 0usize;

        for rule in rules {
            let inserted = match rule.section() {
                Section::Icann => store.icann.insert(rule),
                Section::Private => store.private.insert(rule),
            };
            if !inserted {
                duplicates += 1;
            }
        }

        log::debug!(
            "Built rule store: {} ICANN rules, {} private rules, {} duplicates skipped",
            store.icann.len,
            store.private.len,
            duplicates
        );

        store
    }

    /// Create a store from `(section, rule text)` entries.
    ///
    /// The first malformed entry aborts construction.
    pub fn from_entries<I, S>(entries: I) -> std::result::Result<Self, RuleFormatError>
    where
        I: IntoIterator<Item = (Section, S)>,
        S: AsRef<str>,
    {
        let rules = entries
            .into_iter()
            .map(|(section, text)| Rule::parse(text.as_ref(), section))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }

    /// Create a store by parsing a suffix list in text format.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        ListParser::parse(reader).map(Self::new)
    }

    /// Create a store from list data, gunzipping it first if needed.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let rules = if is_gzip(data) {
            ListParser::parse_gz(data)?
        } else {
            ListParser::parse(data)?
        };
        Ok(Self::new(rules))
    }

    /// Create a store from a suffix list file (plain or gzip-compressed).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let store = Self::from_bytes(&data)?;
        log::info!(
            "Loaded suffix list from {:?}: {} rules ({} bytes)",
            path,
            store.len(),
            data.len()
        );
        Ok(store)
    }

    /// Get the total number of rules.
    pub fn len(&self) -> usize {
        self.icann.len + self.private.len
    }

    /// Check if the store has no rules.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of ICANN rules.
    pub fn icann_len(&self) -> usize {
        self.icann.len
    }

    /// Get the number of private rules.
    pub fn private_len(&self) -> usize {
        self.private.len
    }

    /// Iterate over all rules in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.icann.iter().chain(self.private.iter())
    }

    /// Rules that may match `labels`: those ending in the input's last label
    /// plus any bare `*` rules. ICANN rules come first, then private rules
    /// when `include_private` is set.
    ///
    /// `labels` must already be lower-cased.
    pub fn lookup_candidates<'a>(
        &'a self,
        labels: &[&str],
        include_private: bool,
    ) -> impl Iterator<Item = &'a Rule> + 'a {
        let last = labels.last().copied().unwrap_or_default();
        let icann = self.icann.candidates(last);
        let private = Section::Private
            .is_active(include_private)
            .then(|| self.private.candidates(last))
            .into_iter()
            .flatten();
        icann.chain(private)
    }

    /// Parse `name` into its parts. See [`crate::parse`].
    pub fn parse<'n>(
        &self,
        name: impl Into<Option<&'n str>>,
        options: ParseOptions,
    ) -> Result<DomainName> {
        api::parse(self, name, options)
    }

    /// Registrable domain of `name`, if any. See [`crate::domain`].
    pub fn domain<'n>(&self, name: impl Into<Option<&'n str>>, ignore_private: bool) -> Option<String> {
        api::domain(self, name, ignore_private)
    }

    /// Whether `name` parses. See [`crate::is_valid`].
    pub fn is_valid<'n>(&self, name: impl Into<Option<&'n str>>, options: ParseOptions) -> bool {
        api::is_valid(self, name, options)
    }
}

/// Check if data is gzip compressed.
fn is_gzip(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0x1f && data[1] == 0x8b
}
