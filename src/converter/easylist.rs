//! EasyList-style filter list parser.

use std::io::BufRead;

use crate::bucket::Buckets;
use crate::rule::classify;
use crate::{Result, RuleKind};

/// Per-run counters, reported when a parse finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines read from the input
    pub lines: usize,
    /// Lines that produced a rule
    pub rules: usize,
    /// Rule lines dropped because of a skippable error
    pub skipped: usize,
}

/// EasyList-style filter list parser.
pub struct EasyListParser;

impl EasyListParser {
    /// Parse a filter list into buckets.
    ///
    /// Lines are classified one at a time, in input order. Skippable errors
    /// are logged and the line is dropped; read errors abort the parse.
    pub fn parse<R: BufRead>(reader: R) -> Result<Buckets> {
        Self::parse_with_stats(reader).map(|(buckets, _)| buckets)
    }

    /// Parse a filter list into buckets, returning the run counters too.
    pub fn parse_with_stats<R: BufRead>(reader: R) -> Result<(Buckets, ParseStats)> {
        let mut buckets = Buckets::new();
        let mut stats = ParseStats::default();

        for line in reader.split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            stats.lines += 1;

            match classify(&line) {
                Ok(Some(rule)) => {
                    log::debug!(
                        "line {}: {} {} `{}`",
                        stats.lines,
                        rule.kind(),
                        rule.entry().match_type(),
                        rule.entry().value()
                    );
                    stats.rules += 1;
                    buckets.push(rule);
                }
                Ok(None) => {}
                Err(e) if e.is_skippable() => {
                    log::warn!("line {}: {}", stats.lines, e);
                    stats.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        log::info!(
            "Parsed {} lines: {} rules ({} site, {} !site, {} ip, {} !ip), {} skipped",
            stats.lines,
            stats.rules,
            buckets.bucket(RuleKind::SiteBlacklist).len(),
            buckets.bucket(RuleKind::SiteWhitelist).len(),
            buckets.bucket(RuleKind::IpBlacklist).len(),
            buckets.bucket(RuleKind::IpWhitelist).len(),
            stats.skipped
        );

        Ok((buckets, stats))
    }
}
