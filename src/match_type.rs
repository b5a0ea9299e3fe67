//! Match type definitions.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Positional flags collected while a line is classified.
    ///
    /// Flags only accumulate; [`MatchType::from_flags`] turns them into the
    /// match type the rest of the pipeline works with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MatchFlags: u8 {
        /// Match starts at the beginning of the domain (`|`, `http://`).
        const PREFIX_ANCHORED = 0b0000_0001;
        /// Match covers the domain and its subdomains (`||`, trailing `/`).
        const SUFFIX_ANCHORED = 0b0000_0010;
        /// Rule body is a regular expression.
        const IS_REGEX = 0b0000_0100;
    }
}

/// MatchType describes how an entry's value is matched against a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchType {
    /// Value may appear anywhere in the domain
    #[default]
    Substring,
    /// Value matches the domain and all its subdomains
    DomainSuffix,
    /// Value matches only the literal domain
    Exact,
    /// Value is a regular expression over the domain
    Regex,
}

impl MatchType {
    /// Derive the match type from accumulated flags.
    pub fn from_flags(flags: MatchFlags) -> Self {
        if flags.contains(MatchFlags::IS_REGEX) {
            MatchType::Regex
        } else if flags.contains(MatchFlags::PREFIX_ANCHORED) {
            MatchType::Exact
        } else if flags.contains(MatchFlags::SUFFIX_ANCHORED) {
            MatchType::DomainSuffix
        } else {
            MatchType::Substring
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Substring => "keyword",
            MatchType::DomainSuffix => "domain",
            MatchType::Exact => "full",
            MatchType::Regex => "regexp",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_type_from_flags() {
        assert_eq!(MatchType::from_flags(MatchFlags::empty()), MatchType::Substring);
        assert_eq!(
            MatchType::from_flags(MatchFlags::SUFFIX_ANCHORED),
            MatchType::DomainSuffix
        );
        assert_eq!(
            MatchType::from_flags(MatchFlags::PREFIX_ANCHORED),
            MatchType::Exact
        );
        assert_eq!(
            MatchType::from_flags(MatchFlags::PREFIX_ANCHORED | MatchFlags::SUFFIX_ANCHORED),
            MatchType::Exact
        );
        assert_eq!(MatchType::from_flags(MatchFlags::IS_REGEX), MatchType::Regex);
    }

    #[test]
    fn test_match_type_display() {
        assert_eq!(MatchType::Substring.to_string(), "keyword");
        assert_eq!(MatchType::DomainSuffix.to_string(), "domain");
        assert_eq!(MatchType::Exact.to_string(), "full");
        assert_eq!(MatchType::Regex.to_string(), "regexp");
    }
}
