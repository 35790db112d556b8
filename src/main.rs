use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tcpdumpw::{Config, FilterContext, FilterMode};

#[derive(Parser)]
#[command(name = "tcpdumpw")]
#[command(about = "Build a canonical packet capture filter")]
struct Cli {
    /// Config file (defaults to $TCPDUMPW_CONFIG or /etc/tcpdumpw.conf)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Network protocols, e.g. "ipv4", "4,0x86dd", "ALL"
    #[arg(long, value_name = "SELECTOR")]
    l3_protos: Option<String>,

    /// Transport protocols, e.g. "tcp", "17", "0x06,udp", "ALL"
    #[arg(long, value_name = "SELECTOR")]
    l4_protos: Option<String>,

    /// Existing filter expression to merge into
    #[arg(long, value_name = "EXPR")]
    filter: Option<String>,

    /// How fragments are merged: and, or, replace
    #[arg(long)]
    mode: Option<FilterMode>,

    /// Print each provider's resolution before the filter
    #[arg(long)]
    describe: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.config.unwrap_or_else(Config::default_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    if let Some(l3) = cli.l3_protos {
        config.l3_protocols = l3;
    }
    if let Some(l4) = cli.l4_protos {
        config.l4_protocols = l4;
    }
    if let Some(filter) = cli.filter {
        config.filter = Some(filter).filter(|f| !f.trim().is_empty());
    }
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    tracing::info!(?config, "Building capture filter");

    let chain = config.filter_chain();
    if cli.describe {
        for provider in chain.providers() {
            println!("{}", provider.describe());
        }
    }

    match chain.build(&FilterContext::default()) {
        Some(expression) => println!("{}", expression),
        None => println!(),
    }

    Ok(())
}
