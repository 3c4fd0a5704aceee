use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use kitroom_inventory::Inventory;
use kitroom_server::{KitroomServer, ServerConfig};
use kitroom_store::{ItemStore, PostgresStore};
use kitroom_types::Snapshot;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Migrate(args) => cmd_migrate(args).await,
        Command::Seed(args) => cmd_seed(args).await,
    }
}

/// Layer the config file (or defaults) under explicit flags. The database
/// URL flag already falls back to `DATABASE_URL` through clap.
fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(dir) = &args.client_dir {
        config.client_dir = dir.clone();
    }
    Ok(config.with_database_url(args.database_url.clone()))
}

fn read_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let snapshot =
        Snapshot::from_json(&data).with_context(|| format!("parsing {}", path.display()))?;
    snapshot
        .validate()
        .with_context(|| format!("invalid item in {}", path.display()))?;
    Ok(snapshot)
}

async fn connect(url: &str) -> anyhow::Result<PostgresStore> {
    let store = PostgresStore::connect(url).context("configuring database pool")?;
    store.migrate().await.context("applying migrations")?;
    Ok(store)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let store = if config.is_persistent() { "postgres" } else { "memory" };
    println!(
        "{} kitroom on {} (store: {}, client: {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        store.cyan(),
        config.client_dir.display()
    );
    let server = KitroomServer::bootstrap(config)
        .await
        .context("starting server")?;
    server.serve().await.context("serving requests")?;
    Ok(())
}

async fn cmd_migrate(args: MigrateArgs) -> anyhow::Result<()> {
    connect(&args.database_url).await?;
    println!("{} Schema up to date", "✓".green().bold());
    Ok(())
}

async fn cmd_seed(args: SeedArgs) -> anyhow::Result<()> {
    let snapshot = read_snapshot(&args.file)?;
    let (items, issued) = (snapshot.items.len(), snapshot.issued.len());
    let store: Arc<dyn ItemStore> = Arc::new(connect(&args.database_url).await?);
    let inventory = Inventory::from_snapshot(snapshot, Some(store));
    inventory.persist_all().await.context("writing snapshot")?;
    println!(
        "{} Seeded {} items and {} issuance records from {}",
        "✓".green().bold(),
        items.to_string().bold(),
        issued.to_string().bold(),
        args.file.display().to_string().yellow()
    );
    Ok(())
}
