use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use lathe_sketch::config::{CliArgs, SessionConfig};
use lathe_sketch::Session;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing
    let filter = if args.verbose {
        EnvFilter::new("lathe_sketch=debug")
    } else {
        EnvFilter::new("lathe_sketch=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config: SessionConfig = args.into();

    // Configure rayon thread pool
    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure rayon thread pool")?;
    }

    match Session::run(&config) {
        Ok(result) => {
            println!("{result}");
            Ok(())
        }
        Err(e) => {
            error!(%e, "Session failed");
            Err(anyhow::anyhow!(e)).context("lathe-sketch session failed")
        }
    }
}
