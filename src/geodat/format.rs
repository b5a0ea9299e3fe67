//! v2ray `routercommon` messages used by `geosite.dat` and `geoip.dat`.
//!
//! Only the fields this crate writes are declared. Field tags follow
//! `app/router/routercommon/common.proto`, so the output decodes with
//! v2ray's own types.

/// A single domain rule.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Domain {
    #[prost(enumeration = "domain::Type", tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
}

/// Nested types of [`Domain`].
pub mod domain {
    /// How a domain rule value is matched.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        /// Keyword match anywhere in the domain
        Plain = 0,
        /// Regular expression
        Regex = 1,
        /// Domain and its subdomains
        RootDomain = 2,
        /// Exact domain
        Full = 3,
    }
}

/// An IP range.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cidr {
    /// 4 bytes for IPv4, 16 for IPv6
    #[prost(bytes = "vec", tag = "1")]
    pub ip: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint32, tag = "2")]
    pub prefix: u32,
}

/// A named list of IP ranges.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeoIp {
    #[prost(string, tag = "1")]
    pub country_code: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub cidr: ::prost::alloc::vec::Vec<Cidr>,
}

/// The top-level message of `geoip.dat`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeoIpList {
    #[prost(message, repeated, tag = "1")]
    pub entry: ::prost::alloc::vec::Vec<GeoIp>,
}

/// A named list of domain rules.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeoSite {
    #[prost(string, tag = "1")]
    pub country_code: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub domain: ::prost::alloc::vec::Vec<Domain>,
}

/// The top-level message of `geosite.dat`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeoSiteList {
    #[prost(message, repeated, tag = "1")]
    pub entry: ::prost::alloc::vec::Vec<GeoSite>,
}
