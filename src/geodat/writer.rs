//! geosite/geoip list writer.

use std::net::IpAddr;

use prost::Message;

use super::format::{domain, Cidr, Domain, GeoIp, GeoIpList, GeoSite, GeoSiteList};
use crate::bucket::{Bucket, Buckets};
use crate::rule::parse_cidr;
use crate::{MatchType, Result};

impl From<MatchType> for domain::Type {
    fn from(match_type: MatchType) -> Self {
        match match_type {
            MatchType::Substring => domain::Type::Plain,
            MatchType::DomainSuffix => domain::Type::RootDomain,
            MatchType::Exact => domain::Type::Full,
            MatchType::Regex => domain::Type::Regex,
        }
    }
}

/// Convert a site bucket into a [`GeoSite`] named after the bucket.
pub fn to_geosite(bucket: &Bucket) -> GeoSite {
    GeoSite {
        country_code: bucket.name().to_string(),
        domain: bucket
            .entries()
            .iter()
            .map(|entry| Domain {
                r#type: domain::Type::from(entry.match_type()) as i32,
                value: entry.value().to_string(),
            })
            .collect(),
    }
}

/// Convert an ip bucket into a [`GeoIp`] named after the bucket.
///
/// Entries that do not parse as an address are logged and left out; the rest
/// of the bucket is kept.
pub fn to_geoip(bucket: &Bucket) -> GeoIp {
    let mut cidr = Vec::with_capacity(bucket.len());
    for entry in bucket.entries() {
        match parse_cidr(entry.value()) {
            Ok(net) => {
                let ip = match net.addr() {
                    IpAddr::V4(v4) => v4.octets().to_vec(),
                    IpAddr::V6(v6) => v6.octets().to_vec(),
                };
                cidr.push(Cidr {
                    ip,
                    prefix: u32::from(net.prefix_len()),
                });
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    GeoIp {
        country_code: bucket.name().to_string(),
        cidr,
    }
}

/// Writer for geosite/geoip rule lists.
///
/// Lists are sorted by country code and encoded in memory, so a caller only
/// ever writes complete output.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoDatWriter;

impl GeoDatWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Encode the `site` and `!site` buckets as a [`GeoSiteList`].
    pub fn write_sites(&self, buckets: &Buckets) -> Result<Vec<u8>> {
        let mut list = GeoSiteList {
            entry: buckets.site_buckets().into_iter().map(to_geosite).collect(),
        };
        list.entry.sort_by(|a, b| a.country_code.cmp(&b.country_code));

        encode(&list)
    }

    /// Encode the `ip` and `!ip` buckets as a [`GeoIpList`].
    pub fn write_ips(&self, buckets: &Buckets) -> Result<Vec<u8>> {
        let mut list = GeoIpList {
            entry: buckets.ip_buckets().into_iter().map(to_geoip).collect(),
        };
        list.entry.sort_by(|a, b| a.country_code.cmp(&b.country_code));

        encode(&list)
    }
}

fn encode<M: Message>(message: &M) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(message.encoded_len());
    message.encode(&mut buffer)?;
    Ok(buffer)
}
