//! Longest-match rule selection.

use crate::rule::{Rule, RuleKind};
use crate::RuleStore;

/// Find the rule that governs `labels`.
///
/// Every candidate from the store is tested against the right end of
/// `labels`. A matching exception wins outright (the longest one if several
/// match); otherwise the rule covering the most labels wins, where a
/// wildcard counts its `*` position. On equal length the candidate seen
/// first wins, ICANN before private. Returns `None` when no listed rule
/// matches.
///
/// `labels` must already be lower-cased.
pub fn find<'a>(store: &'a RuleStore, labels: &[&str], include_private: bool) -> Option<&'a Rule> {
    let mut best: Option<&Rule> = None;
    let mut best_exception: Option<&Rule> = None;

    for rule in store.lookup_candidates(labels, include_private) {
        if !rule.matches(labels) {
            continue;
        }

        let slot = match rule.kind() {
            RuleKind::Exception => &mut best_exception,
            RuleKind::Normal | RuleKind::Wildcard => &mut best,
        };
        if slot.map_or(true, |current| rule.match_len() > current.match_len()) {
            *slot = Some(rule);
        }
    }

    let found = best_exception.or(best);
    if let Some(rule) = found {
        log::trace!("{:?} matched rule {} ({})", labels, rule, rule.section());
    }
    found
}

/// Like [`find`], falling back to the implicit `*` rule when nothing in the
/// store matches, so the last label becomes the suffix.
pub fn governing_rule<'a>(
    store: &'a RuleStore,
    labels: &[&str],
    include_private: bool,
) -> &'a Rule {
    find(store, labels, include_private).unwrap_or_else(|| Rule::default_rule())
}

/// Number of trailing labels of `labels` that form the public suffix.
pub fn suffix_len(store: &RuleStore, labels: &[&str], include_private: bool) -> usize {
    governing_rule(store, labels, include_private).suffix_len()
}
