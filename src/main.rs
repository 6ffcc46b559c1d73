//! Crawl-Site main entry point
//!
//! This is the command-line interface for inspecting site files.

use anyhow::Context;
use clap::Parser;
use crawl_site::config::load_sites_with_hash;
use crawl_site::{Site, Task};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Crawl-Site: per-site crawl settings
///
/// Loads a TOML site file, validates it, and shows the settings each crawl
/// target will be fetched with.
#[derive(Parser, Debug)]
#[command(name = "crawl-site")]
#[command(version = "1.0.0")]
#[command(about = "Inspect per-site crawl settings", long_about = None)]
struct Cli {
    /// Path to TOML site file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Only print the task id of every site
    #[arg(long)]
    tasks: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading sites from: {}", cli.config.display());
    let (sites, hash) = load_sites_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Loaded {} sites (hash: {})", sites.len(), hash);

    for site in &sites {
        if cli.tasks {
            println!("{}", site.to_task()?.uuid());
        } else {
            print_site(site)?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("crawl_site=info,warn"),
            1 => EnvFilter::new("crawl_site=debug,info"),
            2 => EnvFilter::new("crawl_site=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prints the settings of one site
fn print_site(site: &Site) -> anyhow::Result<()> {
    let task = site.to_task()?;
    println!("=== {} ===", task.uuid());

    println!(
        "  User agent: {}",
        site.user_agent().unwrap_or("(downloader default)")
    );
    println!("  Charset: {}", site.charset().unwrap_or("(auto-detect)"));
    println!("  Sleep time: {}ms", site.sleep_time());
    println!("  Time out: {}ms", site.time_out());
    println!(
        "  Retries: {} immediate, {} cycle",
        site.retry_times(),
        site.cycle_retry_times()
    );

    let mut codes: Vec<u16> = site.accept_status_codes().iter().copied().collect();
    codes.sort_unstable();
    println!("  Accepted status codes: {:?}", codes);

    println!("  Start URLs ({}):", site.start_urls().len());
    for url in site.start_urls() {
        println!("    * {}", url);
    }

    if !site.cookies().is_empty() {
        println!("  Cookies:");
        for (name, value) in site.cookies() {
            println!("    {}={}", name, value);
        }
    }

    if !site.headers().is_empty() {
        let mut headers: Vec<_> = site.headers().iter().collect();
        headers.sort();
        println!("  Headers:");
        for (key, value) in headers {
            println!("    {}: {}", key, value);
        }
    }

    println!();
    Ok(())
}
