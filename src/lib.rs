//! K2Suffix - Public Suffix List rule engine.
//!
//! This crate finds the registrable domain of a hostname by matching it
//! against Public Suffix List rules, and splits the hostname into its
//! third-level, second-level and top-level parts.
//!
//! # Features
//!
//! - **Full PSL semantics**: normal, wildcard (`*.ke`) and exception
//!   (`!www.ck`) rules with longest-match selection
//! - **Private section**: organization suffixes (`blogspot.com`) can be
//!   included or ignored per lookup
//! - **Strict validation**: URI-shaped input, empty labels, illegal
//!   characters and hyphen-edged labels are rejected before matching
//! - **Thread-safe**: the rule store is immutable once built
//! - **List loading**: plain or gzip-compressed `public_suffix_list.dat`
//!
//! # Quick Start
//!
//! ```
//! use k2suffix::{ParseOptions, RuleStore};
//!
//! let list = "\
//! com
//! uk
//! co.uk
//! // ===BEGIN PRIVATE DOMAINS===
//! blogspot.com
//! // ===END PRIVATE DOMAINS===
//! ";
//! let store = RuleStore::from_reader(list.as_bytes()).unwrap();
//!
//! let name = store.parse("foo.verybritish.co.uk", ParseOptions::default()).unwrap();
//! assert_eq!(name.trd(), Some("foo"));
//! assert_eq!(name.sld(), "verybritish");
//! assert_eq!(name.tld(), "co.uk");
//!
//! assert_eq!(store.domain("blogspot.com", false), None);
//! assert_eq!(store.domain("blogspot.com", true).as_deref(), Some("blogspot.com"));
//! assert!(!store.is_valid("http://google.com", ParseOptions::default()));
//! ```
//!
//! # Matching Priority
//!
//! 1. A matching exception rule always governs
//! 2. Otherwise the rule covering the most labels (a wildcard counts its `*`)
//! 3. Without any match the last label is the suffix (implicit `*` rule)

mod api;
mod domain;
mod error;
mod section;
mod validator;

pub mod list;
pub mod matcher;
pub mod rule;
pub mod store;

// Re-export core types
pub use domain::DomainName;
pub use error::{Error, Result, RuleFormatError};
pub use rule::{Rule, RuleKind};
pub use section::Section;
pub use store::{ParseOptions, RuleStore};

// Re-export the lookup API
pub use api::{domain, is_valid, parse};
pub use validator::{validate_syntax, MAX_LABEL_LEN, MAX_NAME_LEN};

// Re-export the list parser
pub use list::ListParser;
