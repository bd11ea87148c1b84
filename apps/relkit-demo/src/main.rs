mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::AppConfig;

/// Relational mapping pattern demonstrations.
#[derive(Parser)]
#[command(name = "relkit-demo")]
#[command(about = "Runs the four relational mapping demonstration scenarios")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use a private in-memory database for every scenario
    #[arg(long)]
    mock: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    // Layered config: defaults -> YAML (if provided) -> env (RELKIT__*)
    // -> CLI overrides.
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.mock {
        config.set_mock();
    }

    let level = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_owned(),
        _ => "trace".to_owned(),
    };
    logging::init(&level);

    info!("relkit demo starting");
    run_scenarios(&config).await?;
    info!("all scenarios complete");
    Ok(())
}

/// Run the four fixed scenarios in sequence, each against its own
/// connection so the example schemas never share a namespace.
async fn run_scenarios(config: &AppConfig) -> Result<()> {
    let opts = relkit_db::ConnectOpts::default();

    info!(dsn = config.module_dsn("one_to_one"), "one-to-one");
    let db = relkit_db::connect(config.module_dsn("one_to_one"), opts.clone()).await?;
    one_to_one::Migrator::up(&db, None).await?;
    one_to_one::demo::run(&db).await?;

    info!(dsn = config.module_dsn("one_to_many"), "one-to-many");
    let db = relkit_db::connect(config.module_dsn("one_to_many"), opts.clone()).await?;
    one_to_many::Migrator::up(&db, None).await?;
    one_to_many::demo::run(&db).await?;

    info!(dsn = config.module_dsn("single_table"), "single-table");
    let db = relkit_db::connect(config.module_dsn("single_table"), opts.clone()).await?;
    single_table::Migrator::up(&db, None).await?;
    single_table::demo::run(&db).await?;

    info!(dsn = config.module_dsn("table_per_class"), "table-per-class");
    let db = relkit_db::connect(config.module_dsn("table_per_class"), opts).await?;
    table_per_class::Migrator::up(&db, None).await?;
    table_per_class::demo::run(&db).await?;

    Ok(())
}
