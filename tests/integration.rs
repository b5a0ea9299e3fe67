//! End-to-end tests: filter list in, encoded geosite/geoip lists out.

use easylist2dat::geodat::{domain, GeoIpList, GeoSiteList};
use easylist2dat::{convert, run, ConvertConfig, Error, InputSource, OutputSink};
use prost::Message;
use std::fs;
use std::io::Write;

const EASYLIST: &str = "[Adblock Plus 2.0]
! Title: EasyList sample
! Homepage: https://easylist.to/
||doubleclick.net^
||adserver.example.com^$third-party
|http://banner.example.org/
ads.example.net
@@||cdn.example.com^
@@|https://static.example.com/
/^https?:\\/\\/track[0-9]+\\.example\\.com\\/pixel/
/ads(/
example.org##.sidebar-ad
##.ad-banner
&ad_slot=
1.2.3.4
@@[2001:db8::1]
300.1.1.1
";

fn convert_both(input: &str) -> (Vec<u8>, Vec<u8>) {
    let mut sites = Vec::new();
    let mut ips = Vec::new();
    convert(input.as_bytes(), Some(&mut sites), Some(&mut ips)).unwrap();
    (sites, ips)
}

#[test]
fn test_convert_sample_list() {
    let (sites, ips) = convert_both(EASYLIST);

    let sites = GeoSiteList::decode(sites.as_slice()).unwrap();
    let codes: Vec<_> = sites.entry.iter().map(|e| e.country_code.as_str()).collect();
    assert_eq!(codes, vec!["!site", "site"]);

    let whitelist = &sites.entry[0].domain;
    assert_eq!(whitelist.len(), 2);
    assert_eq!(whitelist[0].value, "cdn.example.com");
    assert_eq!(whitelist[0].r#type(), domain::Type::RootDomain);
    assert_eq!(whitelist[1].value, "static.example.com");
    assert_eq!(whitelist[1].r#type(), domain::Type::Full);

    let blacklist = &sites.entry[1].domain;
    let values: Vec<_> = blacklist.iter().map(|d| (d.r#type(), d.value.as_str())).collect();
    assert_eq!(
        values,
        vec![
            (domain::Type::RootDomain, "doubleclick.net"),
            (domain::Type::RootDomain, "adserver.example.com"),
            (domain::Type::Full, "banner.example.org"),
            (domain::Type::Plain, "ads.example.net"),
            (domain::Type::Regex, r"^track[0-9]+\.example\.com"),
        ]
    );

    let ips = GeoIpList::decode(ips.as_slice()).unwrap();
    let codes: Vec<_> = ips.entry.iter().map(|e| e.country_code.as_str()).collect();
    assert_eq!(codes, vec!["!ip", "ip"]);
    assert_eq!(ips.entry[0].cidr.len(), 1);
    assert_eq!(ips.entry[0].cidr[0].prefix, 128);
    // 300.1.1.1 classifies but fails to parse, so only 1.2.3.4 remains
    assert_eq!(ips.entry[1].cidr.len(), 1);
    assert_eq!(ips.entry[1].cidr[0].ip, vec![1, 2, 3, 4]);
    assert_eq!(ips.entry[1].cidr[0].prefix, 32);
}

#[test]
fn test_summary_counts() {
    let mut sites = Vec::new();
    let summary = convert(EASYLIST.as_bytes(), Some(&mut sites), None).unwrap();

    assert_eq!(summary.stats.lines, EASYLIST.lines().count());
    assert_eq!(summary.stats.rules, 10);
    assert_eq!(summary.stats.skipped, 1);
    assert_eq!(summary.site_bytes, Some(sites.len()));
    assert_eq!(summary.ip_bytes, None);
}

#[test]
fn test_output_is_deterministic() {
    let first = convert_both(EASYLIST);
    let second = convert_both(EASYLIST);
    assert_eq!(first, second);
}

#[test]
fn test_discarded_outputs() {
    let summary = convert(EASYLIST.as_bytes(), None, None).unwrap();
    assert_eq!(summary.site_bytes, None);
    assert_eq!(summary.ip_bytes, None);
    assert_eq!(summary.stats.rules, 10);
}

#[test]
fn test_run_with_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("easylist.txt");
    let sites = dir.path().join("site.dat");
    let ips = dir.path().join("ip.dat");

    let mut file = fs::File::create(&input).unwrap();
    file.write_all(EASYLIST.as_bytes()).unwrap();
    drop(file);

    // Stale content must not survive the rewrite
    fs::write(&sites, vec![0xAA; 64 * 1024]).unwrap();

    let config = ConvertConfig {
        input: InputSource::File(input),
        sites: Some(OutputSink::File(sites.clone())),
        ips: Some(OutputSink::File(ips.clone())),
    };
    let summary = run(&config).unwrap();

    let site_data = fs::read(&sites).unwrap();
    let ip_data = fs::read(&ips).unwrap();
    assert_eq!(summary.site_bytes, Some(site_data.len()));
    assert_eq!(summary.ip_bytes, Some(ip_data.len()));

    let (expected_sites, expected_ips) = convert_both(EASYLIST);
    assert_eq!(site_data, expected_sites);
    assert_eq!(ip_data, expected_ips);
}

#[test]
fn test_run_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let sites = dir.path().join("site.dat");

    let config = ConvertConfig {
        input: InputSource::File(dir.path().join("missing.txt")),
        sites: Some(OutputSink::File(sites.clone())),
        ips: None,
    };

    let err = run(&config).unwrap_err();
    assert!(matches!(err, Error::OpenInput { .. }));
    assert!(!err.is_skippable());
    assert!(!sites.exists());
}

#[test]
fn test_failed_run_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("easylist.txt");
    let sites = dir.path().join("site.dat");
    fs::write(&input, EASYLIST).unwrap();
    fs::write(&sites, b"previous good output").unwrap();

    let config = ConvertConfig {
        input: InputSource::File(input),
        sites: Some(OutputSink::File(sites.clone())),
        ips: Some(OutputSink::File(dir.path().join("no/such/ip.dat"))),
    };

    assert!(matches!(run(&config), Err(Error::CreateOutput { .. })));
    assert_eq!(fs::read(&sites).unwrap(), b"previous good output");
}

#[test]
fn test_run_unwritable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("easylist.txt");
    fs::write(&input, EASYLIST).unwrap();

    let config = ConvertConfig {
        input: InputSource::File(input),
        sites: Some(OutputSink::File(dir.path().join("no/such/dir/site.dat"))),
        ips: None,
    };

    assert!(matches!(run(&config), Err(Error::CreateOutput { .. })));
}
