//! IP literal to CIDR conversion for ip rule lists.

use ipnet::IpNet;
use std::net::IpAddr;

use crate::{Error, Result};

/// Parse an IP rule value into a CIDR prefix.
///
/// Accepts a bare address (full-length prefix) or `address/prefix`, with
/// optional brackets around the address. IPv4-mapped IPv6 addresses are
/// treated as IPv4. Host bits are kept as written.
///
/// # Examples
/// ```
/// use easylist2dat::rule::parse_cidr;
///
/// let net = parse_cidr("1.2.3.4").unwrap();
/// assert_eq!(net.prefix_len(), 32);
///
/// let net = parse_cidr("[2001:db8::]/32").unwrap();
/// assert_eq!(net.prefix_len(), 32);
///
/// assert!(parse_cidr("example.com").is_err());
/// ```
pub fn parse_cidr(value: &str) -> Result<IpNet> {
    let value = value.trim();
    let (addr, prefix) = match value.split_once('/') {
        Some((addr, prefix)) if !prefix.is_empty() => (addr, Some(prefix)),
        Some((addr, _)) => (addr, None),
        None => (value, None),
    };
    let addr = addr
        .strip_prefix('[')
        .and_then(|a| a.strip_suffix(']'))
        .unwrap_or(addr);

    let ip = match addr.parse::<IpAddr>() {
        Ok(IpAddr::V6(v6)) => v6.to_ipv4_mapped().map_or(IpAddr::V6(v6), IpAddr::V4),
        Ok(ip) => ip,
        Err(_) => return Err(Error::InvalidIpAddress(value.to_string())),
    };

    let max_prefix = match ip {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    let prefix_len = match prefix {
        Some(prefix) => prefix
            .parse::<u8>()
            .map_err(|_| Error::InvalidCidrPattern(value.to_string()))?,
        None => max_prefix,
    };

    IpNet::new(ip, prefix_len).map_err(|_| Error::InvalidCidrPattern(value.to_string()))
}
