//! Rule buckets: the aggregated output of a conversion.

use crate::rule::{Entry, Rule};
use crate::RuleKind;

/// Bucket is an append-only, ordered list of entries of one [`RuleKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    kind: RuleKind,
    entries: Vec<Entry>,
}

impl Bucket {
    /// Create an empty bucket.
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Get the bucket kind.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Get the bucket name (`ip`, `!ip`, `site`, `!site`).
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Get the entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}

/// Buckets holds exactly one [`Bucket`] per [`RuleKind`].
///
/// Rules are appended in the order they are pushed; nothing is merged,
/// deduplicated or reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    ip: Bucket,
    ip_whitelist: Bucket,
    site: Bucket,
    site_whitelist: Bucket,
}

impl Default for Buckets {
    fn default() -> Self {
        Self {
            ip: Bucket::new(RuleKind::IpBlacklist),
            ip_whitelist: Bucket::new(RuleKind::IpWhitelist),
            site: Bucket::new(RuleKind::SiteBlacklist),
            site_whitelist: Bucket::new(RuleKind::SiteWhitelist),
        }
    }
}

impl Buckets {
    /// Create four empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a classified rule to the bucket of its kind.
    pub fn push(&mut self, rule: Rule) {
        let (kind, entry) = rule.into_parts();
        self.bucket_mut(kind).push(entry);
    }

    /// Get the bucket for a kind.
    pub fn bucket(&self, kind: RuleKind) -> &Bucket {
        match kind {
            RuleKind::IpBlacklist => &self.ip,
            RuleKind::IpWhitelist => &self.ip_whitelist,
            RuleKind::SiteBlacklist => &self.site,
            RuleKind::SiteWhitelist => &self.site_whitelist,
        }
    }

    fn bucket_mut(&mut self, kind: RuleKind) -> &mut Bucket {
        match kind {
            RuleKind::IpBlacklist => &mut self.ip,
            RuleKind::IpWhitelist => &mut self.ip_whitelist,
            RuleKind::SiteBlacklist => &mut self.site,
            RuleKind::SiteWhitelist => &mut self.site_whitelist,
        }
    }

    /// The `site` and `!site` buckets.
    pub fn site_buckets(&self) -> [&Bucket; 2] {
        [&self.site, &self.site_whitelist]
    }

    /// The `ip` and `!ip` buckets.
    pub fn ip_buckets(&self) -> [&Bucket; 2] {
        [&self.ip, &self.ip_whitelist]
    }

    /// Iterate over all four buckets.
    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        RuleKind::ALL.into_iter().map(move |kind| self.bucket(kind))
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.iter().map(Bucket::len).sum()
    }

    /// Check whether every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.iter().all(Bucket::is_empty)
    }
}

impl Extend<Rule> for Buckets {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, rules: I) {
        for rule in rules {
            self.push(rule);
        }
    }
}

impl FromIterator<Rule> for Buckets {
    fn from_iter<I: IntoIterator<Item = Rule>>(rules: I) -> Self {
        let mut buckets = Buckets::new();
        buckets.extend(rules);
        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchType;

    fn rule(kind: RuleKind, match_type: MatchType, value: &str) -> Rule {
        Rule::new(kind, Entry::new(match_type, value))
    }

    #[test]
    fn test_buckets_start_empty() {
        let buckets = Buckets::new();
        assert!(buckets.is_empty());
        assert_eq!(buckets.len(), 0);

        let names: Vec<_> = buckets.iter().map(Bucket::name).collect();
        assert_eq!(names, vec!["ip", "!ip", "site", "!site"]);
    }

    #[test]
    fn test_push_routes_by_kind() {
        let mut buckets = Buckets::new();
        buckets.push(rule(RuleKind::SiteBlacklist, MatchType::DomainSuffix, "ads.com"));
        buckets.push(rule(RuleKind::SiteWhitelist, MatchType::Exact, "ok.com"));
        buckets.push(rule(RuleKind::IpBlacklist, MatchType::Substring, "1.2.3.4"));

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets.bucket(RuleKind::SiteBlacklist).len(), 1);
        assert_eq!(buckets.bucket(RuleKind::SiteWhitelist).len(), 1);
        assert_eq!(buckets.bucket(RuleKind::IpBlacklist).len(), 1);
        assert!(buckets.bucket(RuleKind::IpWhitelist).is_empty());
    }

    #[test]
    fn test_insertion_order_and_duplicates_kept() {
        let buckets: Buckets = vec![
            rule(RuleKind::SiteBlacklist, MatchType::Substring, "b.com"),
            rule(RuleKind::SiteBlacklist, MatchType::Substring, "a.com"),
            rule(RuleKind::SiteBlacklist, MatchType::Substring, "b.com"),
        ]
        .into_iter()
        .collect();

        let values: Vec<_> = buckets
            .bucket(RuleKind::SiteBlacklist)
            .entries()
            .iter()
            .map(Entry::value)
            .collect();
        assert_eq!(values, vec!["b.com", "a.com", "b.com"]);
    }

    #[test]
    fn test_site_and_ip_buckets() {
        let buckets = Buckets::new();
        let site: Vec<_> = buckets.site_buckets().iter().map(|b| b.name()).collect();
        let ip: Vec<_> = buckets.ip_buckets().iter().map(|b| b.name()).collect();
        assert_eq!(site, vec!["site", "!site"]);
        assert_eq!(ip, vec!["ip", "!ip"]);
    }
}
