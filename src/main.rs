//! Robots-REP main entry point
//!
//! This is the command-line interface for checking URLs against a local
//! robots.txt file.

use anyhow::Context;
use clap::Parser as ClapParser;
use robots_rep::config::{load_config, Config};
use robots_rep::url::resolve_url;
use robots_rep::{Parser, RobotsTxt};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Robots-REP: Robots Exclusion Protocol checker
///
/// Reads a robots.txt file from disk and reports, for each URL, whether the
/// given user agent may fetch it.
#[derive(ClapParser, Debug)]
#[command(name = "robots-rep")]
#[command(version = "1.0.0")]
#[command(about = "Check URLs against a robots.txt file", long_about = None)]
struct Cli {
    /// Path to the robots.txt file
    #[arg(value_name = "ROBOTS_FILE")]
    robots: PathBuf,

    /// URLs or paths to check
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// User agent to check as (overrides the config file)
    #[arg(short = 'a', long)]
    user_agent: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Report whether the agent is disallowed by a group that names it explicitly
    #[arg(long)]
    explicit: bool,

    /// Print the sitemap URLs declared in the file
    #[arg(long)]
    sitemaps: bool,

    /// Print a summary of the parsed user-agent groups
    #[arg(long)]
    groups: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    let content = std::fs::read_to_string(&cli.robots)
        .with_context(|| format!("Failed to read {}", cli.robots.display()))?;
    let robots = Parser::with_config(&config.parser)
        .parse(&content)
        .with_context(|| format!("Failed to parse {}", cli.robots.display()))?;

    let user_agent = cli
        .user_agent
        .clone()
        .unwrap_or_else(|| config.user_agent.name.clone());
    tracing::debug!("Checking {} URLs as '{}'", cli.urls.len(), user_agent);

    if cli.groups {
        print_groups(&robots);
    }

    if cli.sitemaps {
        for sitemap in robots.sitemaps() {
            println!("sitemap\t{}", sitemap);
        }
    }

    for uri in &cli.urls {
        let url = resolve_url(uri).with_context(|| format!("Cannot check '{}'", uri))?;

        let label = if cli.explicit {
            if robots.is_explicitly_not_allowed_for_url(&url, &user_agent) {
                "explicitly-disallowed"
            } else {
                "not-explicitly-disallowed"
            }
        } else if robots.is_allowed_url(&url, &user_agent) {
            "allowed"
        } else {
            "disallowed"
        };

        println!("{}\t{}", label, uri);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("robots_rep=warn,warn"),
            1 => EnvFilter::new("robots_rep=debug,info"),
            2 => EnvFilter::new("robots_rep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prints one line per group: agents, then rule counts
fn print_groups(robots: &RobotsTxt) {
    println!("=== {} user-agent groups ===", robots.groups().len());
    for group in robots.groups() {
        println!(
            "  {} ({} disallow, {} allow)",
            group.user_agents().join(", "),
            group.disallowed_patterns().len(),
            group.allowed_patterns().len()
        );
        for pattern in group.disallowed_patterns() {
            println!("    disallow {}", pattern);
        }
        for pattern in group.allowed_patterns() {
            println!("    allow    {}", pattern);
        }
    }
}
