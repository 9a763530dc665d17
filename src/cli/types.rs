use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "mindmap-service")]
#[command(about = "Markdown to mind-map rendering and file hosting service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (defaults to mindmap.yml, .yaml, .toml or .json in the working directory)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP service
    #[command(alias = "s", alias = "server")]
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, value_name = "HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short = 'P', long, value_name = "PORT")]
        port: Option<u16>,

        /// Public base URL used in returned links
        #[arg(short = 'u', long, value_name = "URL")]
        public_url: Option<String>,

        /// Store uploads under DIR, with markdown/ and html/ inside it
        #[arg(short, long, value_name = "DIR")]
        storage: Option<PathBuf>,
    },

    /// Render a Markdown file to a mind-map page without starting the service
    #[command(alias = "r")]
    Render {
        /// Markdown file to render
        input: PathBuf,

        /// Where to write the page (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
