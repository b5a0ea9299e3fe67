//! Filter-list line classifier.
//!
//! # Grammar
//!
//! ```text
//! line       = blanks ( regex | structured )
//! regex      = "/" body "/" any*
//! structured = ["@@"] blanks ["|" | "||"] blanks ["http://" | "https://"]
//!              target ["/"] any*
//! target     = domain | ipv4 | ["["] ipv6 ["]"]
//! ```
//!
//! Anything that does not fit is not a rule: comments, cosmetic filters,
//! path-only filters and blank lines all classify to `None`.

use regex::Regex;

use super::strip::strip_url_noise;
use super::{Entry, Rule};
use crate::{Error, MatchFlags, MatchType, Result, RuleKind};

/// Classify a single filter-list line.
///
/// Returns `Ok(None)` for lines that carry no network rule. A regex rule whose
/// body no longer compiles after URL noise is stripped yields
/// [`Error::InvalidRegex`], which only invalidates this line.
///
/// # Examples
/// ```
/// use easylist2dat::rule::classify;
/// use easylist2dat::{MatchType, RuleKind};
///
/// let rule = classify(b"@@||example.com^").unwrap().unwrap();
/// assert_eq!(rule.kind(), RuleKind::SiteWhitelist);
/// assert_eq!(rule.entry().match_type(), MatchType::DomainSuffix);
/// assert_eq!(rule.entry().value(), "example.com");
///
/// assert!(classify(b"! comment").unwrap().is_none());
/// ```
pub fn classify(line: &[u8]) -> Result<Option<Rule>> {
    if is_cosmetic(line) {
        return Ok(None);
    }

    let mut cursor = Cursor::new(line);
    cursor.skip_blanks();

    if cursor.peek() == Some(b'/') {
        return classify_regex(cursor.rest());
    }

    Ok(classify_structured(cursor))
}

/// `rest` starts at the opening slash.
fn classify_regex(rest: &[u8]) -> Result<Option<Rule>> {
    let body = match rest.iter().rposition(|&b| b == b'/') {
        Some(end) if end > 1 => &rest[1..end],
        _ => return Ok(None),
    };

    let body = String::from_utf8_lossy(body);
    let stripped = strip_url_noise(&body);
    log::debug!("regexp `{}` -> `{}`", body, stripped);

    // An empty pattern would match every domain.
    if stripped.is_empty() {
        return Err(Error::EmptyRegex(body.to_string()));
    }

    if let Err(source) = Regex::new(&stripped) {
        return Err(Error::InvalidRegex {
            pattern: body.to_string(),
            source,
        });
    }

    let entry = Entry::new(
        MatchType::from_flags(MatchFlags::IS_REGEX),
        stripped.into_owned(),
    );
    Ok(Some(Rule::new(RuleKind::SiteBlacklist, entry)))
}

/// Element hiding and scriptlet markers.
const COSMETIC_MARKERS: &[&[u8]] = &[b"##", b"#@#", b"#?#", b"#$#", b"#%#"];

fn is_cosmetic(line: &[u8]) -> bool {
    COSMETIC_MARKERS
        .iter()
        .any(|marker| line.windows(marker.len()).any(|w| w == *marker))
}

fn classify_structured(mut cursor: Cursor<'_>) -> Option<Rule> {
    let is_whitelist = cursor.eat(b"@@");
    cursor.skip_blanks();

    let mut flags = MatchFlags::empty();
    if cursor.eat(b"||") {
        flags |= MatchFlags::SUFFIX_ANCHORED;
    } else if cursor.eat(b"|") {
        flags |= MatchFlags::PREFIX_ANCHORED;
    }
    cursor.skip_blanks();

    if cursor.eat(b"https://") || cursor.eat(b"http://") {
        flags |= MatchFlags::PREFIX_ANCHORED;
    }

    let token = cursor.scan_target()?;

    if cursor.eat(b"/") {
        flags |= MatchFlags::SUFFIX_ANCHORED;
    }

    let kind = RuleKind::new(is_whitelist, token.is_site());
    let entry = Entry::new(MatchType::from_flags(flags), token.value());
    Some(Rule::new(kind, entry))
}

/// Target of a structured rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Domain(&'a [u8]),
    Ip(&'a [u8]),
}

impl Token<'_> {
    fn is_site(&self) -> bool {
        matches!(self, Token::Domain(_))
    }

    fn value(&self) -> String {
        let (Token::Domain(bytes) | Token::Ip(bytes)) = *self;
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// Forward-only cursor over a line. Scanners advance only on success.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.rest().first().copied()
    }

    fn eat(&mut self, token: &[u8]) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn skip_blanks(&mut self) {
        self.pos += self
            .rest()
            .iter()
            .take_while(|&&b| b == b' ' || b == b'\t')
            .count();
    }

    fn scan_target(&mut self) -> Option<Token<'a>> {
        if let Some(domain) = self.scan_domain() {
            return Some(Token::Domain(domain));
        }
        self.scan_ipv4().or_else(|| self.scan_ipv6()).map(Token::Ip)
    }

    /// A letter, then `[-a-zA-Z0-9]*`, a dot, then `[-a-zA-Z0-9.]*`.
    fn scan_domain(&mut self) -> Option<&'a [u8]> {
        let rest = self.rest();
        if !rest.first()?.is_ascii_alphabetic() {
            return None;
        }

        let label = 1 + rest[1..].iter().take_while(|&&b| is_label_byte(b)).count();
        if rest.get(label) != Some(&b'.') {
            return None;
        }

        let len = label
            + 1
            + rest[label + 1..]
                .iter()
                .take_while(|&&b| is_label_byte(b) || b == b'.')
                .count();
        self.pos += len;
        Some(&rest[..len])
    }

    /// Four groups of one to three digits.
    fn scan_ipv4(&mut self) -> Option<&'a [u8]> {
        let rest = self.rest();
        let mut len = 0;

        for group in 0..4 {
            if group > 0 {
                if rest.get(len) != Some(&b'.') {
                    return None;
                }
                len += 1;
            }
            let digits = rest[len..]
                .iter()
                .take(3)
                .take_while(|b| b.is_ascii_digit())
                .count();
            if digits == 0 {
                return None;
            }
            len += digits;
        }

        if continues_address(rest.get(len)) {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    /// Full or `::`-compressed IPv6, optionally bracketed. The brackets are
    /// not part of the returned token.
    fn scan_ipv6(&mut self) -> Option<&'a [u8]> {
        let rest = self.rest();
        let bracketed = rest.first() == Some(&b'[');
        let start = usize::from(bracketed);

        let len = rest[start..]
            .iter()
            .take_while(|&&b| b.is_ascii_hexdigit() || b == b':')
            .count();
        let token = &rest[start..start + len];
        if !is_ipv6_shape(token) {
            return None;
        }

        let mut end = start + len;
        if bracketed {
            if rest.get(end) != Some(&b']') {
                return None;
            }
            end += 1;
        } else if continues_address(rest.get(end)) {
            return None;
        }

        self.pos += end;
        Some(token)
    }
}

fn is_label_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// An address literal running straight into more address-like text is
/// malformed, e.g. `1.2.3.4567` or `fe80::1g`.
fn continues_address(next: Option<&u8>) -> bool {
    matches!(next, Some(&b) if b.is_ascii_alphanumeric() || b == b'.')
}

/// Shape check only: eight groups, or fewer around a single `::`. Each group
/// is one to four hex digits.
fn is_ipv6_shape(token: &[u8]) -> bool {
    match token.windows(2).position(|w| w == b"::") {
        Some(pos) => {
            let (head, tail) = (&token[..pos], &token[pos + 2..]);
            match (hex_groups(head), hex_groups(tail)) {
                (Some(h), Some(t)) => h + t < 8,
                _ => false,
            }
        }
        None => hex_groups(token) == Some(8),
    }
}

fn hex_groups(part: &[u8]) -> Option<usize> {
    if part.is_empty() {
        return Some(0);
    }
    let mut count = 0;
    for group in part.split(|&b| b == b':') {
        if group.is_empty() || group.len() > 4 {
            return None;
        }
        count += 1;
    }
    Some(count)
}
