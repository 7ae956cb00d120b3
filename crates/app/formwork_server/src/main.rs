//! Formwork API server binary.

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "formwork_server", about = "Formwork API server")]
struct Args {
    /// Port to listen on (0 = ephemeral).
    #[arg(long, default_value_t = 3400)]
    port: u16,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/formwork"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,formwork_api=debug,formwork_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    info!(database_url = %args.database_url, port = args.port, "starting formwork_server");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    info!("running database migrations");
    formwork_api::migrate(&pool).await?;

    // Expired session rows are dead weight; clear them on boot.
    let purged = formwork_core::auth::sessions::purge_expired_sessions(&pool).await?;
    if purged > 0 {
        info!(purged, "purged expired sessions");
    }

    let config = formwork_api::config::ApiConfig {
        bind_addr: format!("127.0.0.1:{}", args.port),
        database_url: args.database_url,
        jwt_secret: formwork_core::auth::jwt::resolve_jwt_secret(),
    };

    let state = formwork_api::AppState {
        pool,
        config: config.clone(),
    };

    let app = formwork_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
