//! orgsync: add members of one GitHub organization to another.
//!
//! # Usage
//!
//! ```text
//! orgsync --source <org> --target <org> [--url <api>] [--verbose 0|1|2]
//!         [--page-size <n>] [--dry-run] [--json]
//! ```
//!
//! The token is read from `--token` or `GH_USER_SYNC_TOKEN`.

mod progress;
mod report;
mod sync;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use sync::SyncArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "orgsync",
    version,
    about = "Add members of a source GitHub organization that are missing from a target organization",
    long_about = None,
    after_help = "Set GH_USER_SYNC_TOKEN to a GitHub token with org admin and user access.",
)]
struct Cli {
    #[command(flatten)]
    sync: SyncArgs,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.sync.verbose);

    let Some((source, target)) = cli.sync.orgs() else {
        Cli::command()
            .print_help()
            .context("failed to print usage")?;
        println!();
        return Ok(());
    };

    cli.sync.run(source, target)
}

/// `RUST_LOG` wins; otherwise the level follows `--verbose`.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbose {
        0 => "error",
        1 => "info,ureq=warn",
        _ => "debug,ureq=info,rustls=warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
