mod cli;
mod config;
mod files;
mod mindmap;
mod server;
mod utils;

#[tokio::main]
async fn main() {
    cli::run().await;
}
