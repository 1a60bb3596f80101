//! bankdata-web - Bank Data web application
//!
//! Serves the dashboard UI and the JSON API for document management,
//! budget tracking, and upload monitoring, backed by SQLite.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bankdata_web::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "bankdata-web", version, about = "Bank Data web application")]
struct Args {
    /// Root folder for database and uploads (overrides BANKDATA_ROOT)
    #[arg(long)]
    root_folder: Option<String>,

    /// Port to listen on
    #[arg(long, env = "BANKDATA_PORT", default_value_t = 8080)]
    port: u16,

    /// Insert demo users, documents, and budgets at startup
    #[arg(long, default_value_t = false)]
    seed_demo_data: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("Starting bankdata-web");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Step 1: Resolve root folder (CLI > env > TOML > OS default)
    let root_folder = bankdata_common::config::resolve_root_folder(args.root_folder.as_deref())?;
    info!("Root folder: {}", root_folder.display());

    // Step 2: Create root folder and uploads directory if missing
    bankdata_common::config::ensure_directories(&root_folder)?;

    // Step 3: Open or create database (bootstraps the admin user)
    let db_path = bankdata_common::config::database_path(&root_folder);
    info!("Database: {}", db_path.display());
    let db_pool = bankdata_common::db::init_database(&db_path).await?;
    info!("Database connection established");

    if args.seed_demo_data {
        bankdata_common::db::seed::seed_demo_data(&db_pool).await?;
    }

    // Create application state and router
    let uploads_dir = bankdata_common::config::uploads_dir(&root_folder);
    let state = AppState::new(db_pool, uploads_dir);
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    info!("Listening on http://0.0.0.0:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
