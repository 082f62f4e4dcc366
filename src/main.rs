use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use nxtwatch::{
    infrastructure::{
        cli::Cli, config::Config, token_store::FileTokenStore, tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    trace_dbg,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based), then apply command line overrides
    let mut config = Config::new()?;
    if let Some(dark) = args.dark_theme() {
        config.dark_theme = dark;
    }
    trace_dbg!(level: tracing::Level::INFO, &config.api.endpoint);

    let token_store = Arc::new(FileTokenStore::in_data_dir(&config.config.data_dir));
    log::info!("Reading session tokens from {}", token_store.path().display());

    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate)
        .paste(true);

    let mut runner = AppRunner::new(config, tui, token_store)?;
    if let Some(search) = args.search {
        runner = runner.with_search(search);
    }
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
