//! easylist2dat - EasyList-style filter lists to v2ray rule lists.
//!
//! This crate reads AdBlock/EasyList filter lists and turns the lines that
//! name a network target into routing rules, encoded as v2ray `geosite.dat`
//! and `geoip.dat` lists.
//!
//! # Features
//!
//! - **Line classification**: domain, IPv4, IPv6 and `/regex/` rules
//! - **Exception rules**: `@@` rules land in separate `!site` / `!ip` lists
//! - **Anchors**: `|`, `||`, schemes and trailing `/` select the match type
//! - **Regex cleanup**: URL schemes and paths are stripped from regex rules
//! - **Deterministic output**: identical input gives byte-identical lists
//!
//! # Quick Start
//!
//! ```
//! use easylist2dat::converter::EasyListParser;
//! use easylist2dat::{MatchType, RuleKind};
//!
//! let list = "! comment\n||ads.example.com^\n@@||cdn.example.com^\n";
//! let buckets = EasyListParser::parse(list.as_bytes()).unwrap();
//!
//! let site = buckets.bucket(RuleKind::SiteBlacklist);
//! assert_eq!(site.entries()[0].value(), "ads.example.com");
//! assert_eq!(site.entries()[0].match_type(), MatchType::DomainSuffix);
//! assert_eq!(buckets.bucket(RuleKind::SiteWhitelist).len(), 1);
//! ```
//!
//! # Rule Kinds
//!
//! | line | list | match type |
//! |------|------|------------|
//! | `example.com` | `site` | keyword (`Plain`) |
//! | `\|\|example.com^` | `site` | domain (`RootDomain`) |
//! | `\|http://example.com` | `site` | full (`Full`) |
//! | `/ads?\./` | `site` | regexp (`Regex`) |
//! | `@@\|\|example.com` | `!site` | domain (`RootDomain`) |
//! | `1.2.3.4` | `ip` | CIDR `/32` |
//! | `@@[::1]` | `!ip` | CIDR `/128` |

mod error;
mod match_type;
mod rule_kind;

pub mod bucket;
pub mod config;
pub mod converter;
pub mod geodat;
pub mod rule;

// Re-export core types
pub use error::{Error, Result};
pub use match_type::{MatchFlags, MatchType};
pub use rule_kind::RuleKind;

// Re-export the pipeline
pub use bucket::{Bucket, Buckets};
pub use config::{ConvertConfig, InputSource, OutputSink};
pub use converter::{convert, run, ConvertSummary, EasyListParser};
pub use rule::{classify, Entry, Rule};
