//! Public Suffix List text format parser.
//!
//! The format is line based:
//!
//! ```text
//! // comment
//! com
//! *.ke
//! !city.kawasaki.jp
//!
//! // ===BEGIN PRIVATE DOMAINS===
//! blogspot.com
//! // ===END PRIVATE DOMAINS===
//! ```
//!
//! Only the first whitespace-delimited token of a rule line is read.

use flate2::read::GzDecoder;
use std::io::{BufRead, BufReader, Read};

use crate::error::{Error, Result};
use crate::{Rule, Section};

/// Marker opening the private section.
pub const BEGIN_PRIVATE: &str = "===BEGIN PRIVATE DOMAINS===";

/// Marker closing the private section.
pub const END_PRIVATE: &str = "===END PRIVATE DOMAINS===";

/// Suffix list text format parser.
pub struct ListParser;

impl ListParser {
    /// Parse rules from a reader.
    ///
    /// A malformed rule fails the whole parse with its 1-based line number.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();
        let buf_reader = BufReader::new(reader);
        let mut section = Section::Icann;

        for (idx, line) in buf_reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix("//") {
                if let Some(next) = section_marker(comment) {
                    section = next;
                }
                continue;
            }

            let token = line.split_whitespace().next().unwrap_or(line);
            let rule = Rule::parse(token, section).map_err(|source| Error::ListFormat {
                line: idx + 1,
                source,
            })?;
            rules.push(rule);
        }

        log::debug!("Parsed {} suffix rules", rules.len());

        Ok(rules)
    }

    /// Parse rules from a gzip-compressed reader.
    pub fn parse_gz<R: Read>(reader: R) -> Result<Vec<Rule>> {
        Self::parse(GzDecoder::new(reader))
    }
}

/// Section switch announced by a comment line, if any.
fn section_marker(comment: &str) -> Option<Section> {
    let comment = comment.trim();
    if comment.starts_with(BEGIN_PRIVATE) {
        Some(Section::Private)
    } else if comment.starts_with(END_PRIVATE) {
        Some(Section::Icann)
    } else {
        None
    }
}
