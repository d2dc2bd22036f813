use std::net::SocketAddr;
use std::sync::Arc;

use dc_gallery_backend::api::{self, AppState};
use dc_gallery_backend::config::Settings;
use dc_gallery_backend::external::{GalleryCache, GalleryClient, HttpFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();
    let settings = Settings::from_env();

    // Initialize gallery client
    let fetcher = HttpFetcher::new(&settings.base_url, &settings.user_agent, settings.request_timeout)?;
    let cache = GalleryCache::new(settings.cache_duration);
    let gallery_client = GalleryClient::new(Arc::new(fetcher), cache);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    tracing::info!("🚀 {} listening on {}", settings.project_name, addr);
    tracing::info!(
        "📦 Cache duration: {} minutes, upstream: {}",
        settings.cache_duration.as_secs() / 60,
        settings.base_url
    );

    let app = api::router(AppState::new(gallery_client, settings));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
