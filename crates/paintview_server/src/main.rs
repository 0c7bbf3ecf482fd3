//! PaintView API server entrypoint.

use paintview_server::{resolve_bind_address, seed, serve_router, AppState, Catalog, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paintview=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--help") {
        print_help();
        return Ok(());
    }

    let config = Config::from_env();

    let catalog = Catalog::new();
    if config.seed_catalog {
        let seeded = seed::seed_catalog(&catalog)?;
        tracing::info!("Seeded demo catalog with {} artworks", seeded);
    }

    let allow_public = std::env::var("ALLOW_PUBLIC_ACCESS").is_ok();
    if allow_public {
        tracing::warn!("Public access enabled - server will accept requests from any origin");
    }

    let bind_addr = resolve_bind_address(&config, allow_public);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("PaintView backend running at http://{}", bind_addr);

    let state = AppState::new(config, catalog);
    serve_router(listener, state, allow_public, shutdown_signal()).await?;

    Ok(())
}

fn print_help() {
    println!("PaintView Server\n");
    println!("Usage: paintview [OPTIONS]\n");
    println!("Options:");
    println!("  --help            Show this help message");
    println!("\nEnvironment variables:");
    println!("  PORT              Server port (default: 3000)");
    println!("  DEFAULT_PER_PAGE  Page size when a query omits perPage (default: 24)");
    println!("  MAX_PER_PAGE      Upper clamp for requested page sizes (default: 200)");
    println!("  SEED_CATALOG      Seed the demo catalog on startup (default: true)");
    println!("  ALLOW_PUBLIC_ACCESS  Allow CORS from any origin");
    println!("  BIND              Override bind address (e.g. 0.0.0.0:3000)");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down gracefully...");
}
