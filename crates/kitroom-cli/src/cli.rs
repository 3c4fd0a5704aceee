use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kitroom",
    about = "Kitroom inventory tracking and issuance",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Apply database schema migrations
    Migrate(MigrateArgs),
    /// Import a JSON snapshot of items and issuance records into the database
    Seed(SeedArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file; flags and DATABASE_URL override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    #[arg(long)]
    pub client_dir: Option<PathBuf>,
    /// PostgreSQL URL; without one the server keeps everything in memory
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

#[derive(Args)]
pub struct MigrateArgs {
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

#[derive(Args)]
pub struct SeedArgs {
    /// JSON file shaped like `{"items": [...], "issued": [...]}`
    pub file: PathBuf,
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}
