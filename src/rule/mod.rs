//! Classified rules and the filter-list grammar that produces them.

mod cidr;
mod classify;
mod strip;

pub use cidr::parse_cidr;
pub use classify::classify;
pub use strip::strip_url_noise;

use crate::{MatchType, RuleKind};

/// Entry is a single match rule: how to match, and what to match.
///
/// The value is the domain token for domain rules, the stripped body for
/// regex rules, and the literal address (brackets removed) for IP rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    match_type: MatchType,
    value: String,
}

impl Entry {
    /// Create a new entry.
    pub fn new(match_type: MatchType, value: impl Into<String>) -> Self {
        Self {
            match_type,
            value: value.into(),
        }
    }

    /// Get the match type.
    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    /// Get the matched value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Rule is the result of classifying one filter-list line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    kind: RuleKind,
    entry: Entry,
}

impl Rule {
    /// Create a new rule.
    pub fn new(kind: RuleKind, entry: Entry) -> Self {
        Self { kind, entry }
    }

    /// Get the bucket this rule belongs to.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Get the rule's entry.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Split the rule into its kind and entry.
    pub fn into_parts(self) -> (RuleKind, Entry) {
        (self.kind, self.entry)
    }
}
