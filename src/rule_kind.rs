//! Rule kinds and the bucket names they map to.

use std::fmt;

/// RuleKind selects the bucket a classified rule lands in.
///
/// It is the product of two independent properties: whether the rule is an
/// exception (`@@`) and whether it targets a site (domain or regex) rather
/// than an IP literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    /// Blocking rule on an IP literal
    IpBlacklist,
    /// Exception rule on an IP literal
    IpWhitelist,
    /// Blocking rule on a domain or regex
    SiteBlacklist,
    /// Exception rule on a domain or regex
    SiteWhitelist,
}

impl RuleKind {
    /// All kinds, in bucket creation order.
    pub const ALL: [RuleKind; 4] = [
        RuleKind::IpBlacklist,
        RuleKind::IpWhitelist,
        RuleKind::SiteBlacklist,
        RuleKind::SiteWhitelist,
    ];

    /// Build a kind from its two components.
    pub fn new(is_whitelist: bool, targets_site: bool) -> Self {
        match (is_whitelist, targets_site) {
            (false, false) => RuleKind::IpBlacklist,
            (true, false) => RuleKind::IpWhitelist,
            (false, true) => RuleKind::SiteBlacklist,
            (true, true) => RuleKind::SiteWhitelist,
        }
    }

    /// Whether this is an exception rule.
    pub fn is_whitelist(self) -> bool {
        matches!(self, RuleKind::IpWhitelist | RuleKind::SiteWhitelist)
    }

    /// Whether this rule targets a site rather than an IP.
    pub fn targets_site(self) -> bool {
        matches!(self, RuleKind::SiteBlacklist | RuleKind::SiteWhitelist)
    }

    /// Get the bucket name, used as the country code in the encoded lists.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::IpBlacklist => "ip",
            RuleKind::IpWhitelist => "!ip",
            RuleKind::SiteBlacklist => "site",
            RuleKind::SiteWhitelist => "!site",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_components() {
        for kind in RuleKind::ALL {
            assert_eq!(RuleKind::new(kind.is_whitelist(), kind.targets_site()), kind);
        }
        assert_eq!(RuleKind::new(true, true), RuleKind::SiteWhitelist);
        assert_eq!(RuleKind::new(false, false), RuleKind::IpBlacklist);
    }

    #[test]
    fn test_rule_kind_names() {
        assert_eq!(RuleKind::IpBlacklist.to_string(), "ip");
        assert_eq!(RuleKind::IpWhitelist.to_string(), "!ip");
        assert_eq!(RuleKind::SiteBlacklist.to_string(), "site");
        assert_eq!(RuleKind::SiteWhitelist.to_string(), "!site");
    }
}
