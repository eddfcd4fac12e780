//! Server binary: loads config from env, opens the article store, serves the API.

use articles_api::{router, AppConfig, AppState, ArticleStore};
use tokio::net::TcpListener;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Console logging in development; console plus a daily-rolled file under
/// `logs/` in production. The returned guard must stay alive so the file
/// writer flushes on shutdown.
fn init_logging(config: &AppConfig) -> Option<WorkerGuard> {
    let default_filter = if config.debug {
        "articles_api=debug,server=debug,tower_http=debug"
    } else {
        "articles_api=info,server=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    if config.debug {
        registry.init();
        None
    } else {
        let file_appender = tracing_appender::rolling::daily("logs", "articles-api.log");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();
        Some(guard)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    let _guard = init_logging(&config);

    let pool = articles_api::connect(&config).await?;
    articles_api::ensure_schema(&pool).await?;
    let state = AppState {
        store: ArticleStore::new(pool),
    };

    let app = router(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(debug = config.debug, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
