use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use wiki_core::{
    application::services::ApplicationServices,
    config::AppConfig,
    domain::article::ArticleReadRepository,
    infrastructure::repositories::FileSystemArticleRepository,
    presentation::http::{routes::build_router, state::HttpState},
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(FileSystemArticleRepository::new(config.content_dir().clone()));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_read_repo),
        config.include_drafts(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        content_dir = %config.content_dir().display(),
        include_drafts = config.include_drafts(),
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
