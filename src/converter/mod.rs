//! Filter list to rule list conversion.

mod easylist;

pub use easylist::{EasyListParser, ParseStats};

use std::io::{BufRead, Write};

use crate::config::ConvertConfig;
use crate::geodat::GeoDatWriter;
use crate::Result;

/// What a conversion produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Parser counters
    pub stats: ParseStats,
    /// Bytes written to the site destination
    pub site_bytes: Option<usize>,
    /// Bytes written to the ip destination
    pub ip_bytes: Option<usize>,
}

/// Convert a filter list and write the encoded lists.
///
/// A `None` destination discards that half of the rules. Both lists are fully
/// encoded before either destination is written to.
pub fn convert<R: BufRead>(
    reader: R,
    sites: Option<&mut dyn Write>,
    ips: Option<&mut dyn Write>,
) -> Result<ConvertSummary> {
    let (buckets, stats) = EasyListParser::parse_with_stats(reader)?;

    let writer = GeoDatWriter::new();
    let site_data = if sites.is_some() {
        Some(writer.write_sites(&buckets)?)
    } else {
        None
    };
    let ip_data = if ips.is_some() {
        Some(writer.write_ips(&buckets)?)
    } else {
        None
    };

    let mut summary = ConvertSummary {
        stats,
        ..Default::default()
    };
    if let (Some(sink), Some(data)) = (sites, site_data) {
        sink.write_all(&data)?;
        sink.flush()?;
        summary.site_bytes = Some(data.len());
    }
    if let (Some(sink), Some(data)) = (ips, ip_data) {
        sink.write_all(&data)?;
        sink.flush()?;
        summary.ip_bytes = Some(data.len());
    }

    Ok(summary)
}

/// Run a conversion with the resources named by `config`.
///
/// The input and every destination are opened before the first line is read,
/// so a bad path fails the run before any work is done. Handles are closed
/// when this returns.
pub fn run(config: &ConvertConfig) -> Result<ConvertSummary> {
    let reader = config.input.open()?;
    let mut site_sink = config.sites.as_ref().map(|sink| sink.open()).transpose()?;
    let mut ip_sink = config.ips.as_ref().map(|sink| sink.open()).transpose()?;

    log::info!("Reading rules from {:?}", config.input);

    let summary = convert(
        reader,
        site_sink.as_mut().map(|w| &mut **w as &mut dyn Write),
        ip_sink.as_mut().map(|w| &mut **w as &mut dyn Write),
    )?;

    match (&config.sites, summary.site_bytes) {
        (Some(sink), Some(bytes)) => log::info!("Wrote {} bytes of site rules to {:?}", bytes, sink),
        _ => log::info!("Site rules discarded"),
    }
    match (&config.ips, summary.ip_bytes) {
        (Some(sink), Some(bytes)) => log::info!("Wrote {} bytes of ip rules to {:?}", bytes, sink),
        _ => log::info!("IP rules discarded"),
    }

    Ok(summary)
}
