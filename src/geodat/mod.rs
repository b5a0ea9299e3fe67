//! v2ray `.dat` rule list encoding.
//!
//! Site buckets become a `GeoSiteList` (`geosite.dat`), ip buckets a
//! `GeoIpList` (`geoip.dat`). Each bucket is one entry whose country code is
//! the bucket name.
//!
//! # List Structure
//!
//! ```text
//! GeoSiteList
//! ├── GeoSite "!site"   exception rules
//! │   └── Domain { type, value } ...
//! └── GeoSite "site"    blocking rules
//!     └── Domain { type, value } ...
//!
//! GeoIpList
//! ├── GeoIp "!ip"
//! │   └── Cidr { ip, prefix } ...
//! └── GeoIp "ip"
//!     └── Cidr { ip, prefix } ...
//! ```

mod format;
mod writer;


pub use format::*;
pub use writer::{to_geoip, to_geosite, GeoDatWriter};
