use clap::Parser;
use petadex_backend::{config::Cli, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().unwrap_or_default();
    let Cli { config, log_dir } = Cli::parse();

    server::serve(config, log_dir).await
}
