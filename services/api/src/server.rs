use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_listing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use estate_listings::config::AppConfig;
use estate_listings::error::AppError;
use estate_listings::listings::{ListingService, LocationDirectory};
use estate_listings::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let locations = LocationDirectory::bundled().unwrap_or_else(|err| {
        warn!(%err, "location directory unavailable; suggestions disabled");
        LocationDirectory::default()
    });
    let source = config.listings.source();
    let listing_service = Arc::new(ListingService::load(
        source.clone(),
        locations,
        config.listings.settings(),
    )?);

    let app = with_listing_routes(listing_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, catalog = %source, "estate listings service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
