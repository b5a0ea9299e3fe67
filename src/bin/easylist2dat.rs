//! easylist2dat: CLI tool for converting EasyList-like filter lists to v2ray
//! geosite/geoip `.dat` files.

use clap::Parser;
use easylist2dat::ConvertConfig;

#[derive(Parser)]
#[command(name = "easylist2dat")]
#[command(version)]
#[command(about = "Transforms EasyList-like rule files to .dat files used by v2ray")]
#[command(long_about = "Transforms EasyList-like rule files to .dat files used by v2ray.\n\
If any FILE is - or missing, use STDIN or STDOUT instead.")]
struct Cli {
    /// Transform EasyList-like FILE
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    input: String,

    /// Output sites to FILE
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    output: String,

    /// Output sites to FILE, same as --output
    #[arg(short, long, value_name = "FILE")]
    sites: Option<String>,

    /// Output ips to FILE, instead of discarding
    #[arg(short = 'p', long, value_name = "FILE")]
    ips: Option<String>,

    /// Output extra logs to STDERR
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = ConvertConfig::resolve(
        Some(&cli.input),
        Some(&cli.output),
        cli.sites.as_deref(),
        cli.ips.as_deref(),
    );
    log::debug!("{:?}", config);

    if let Err(e) = easylist2dat::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
