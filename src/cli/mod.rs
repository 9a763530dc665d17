pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::{debug, error, LevelFilter};
use std::path::PathBuf;

use crate::config;
use crate::utils::error::BoxResult;
use commands::ServeOverrides;

/// Run the command-line interface
pub async fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    if let Err(e) = dispatch(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn dispatch(cli: types::Cli) -> BoxResult<()> {
    let config = config::load_config(PathBuf::from("."), cli.config.as_deref())?;
    if config.debug && !cli.debug {
        logging::set_log_level(LevelFilter::Debug);
        debug!("Debug logging enabled by configuration");
    }

    match cli.command {
        Some(types::Commands::Serve { host, port, public_url, storage }) => {
            let overrides = ServeOverrides { host, port, public_url, storage };
            commands::handle_serve_command(config, overrides).await
        }
        Some(types::Commands::Render { input, output }) => {
            commands::handle_render_command(&input, output.as_deref())
        }
        None => {
            // Default to serving with the loaded configuration
            commands::handle_serve_command(config, ServeOverrides::default()).await
        }
    }
}
