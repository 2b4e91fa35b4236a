use std::sync::Arc;

use axum::{
    extract::{Path, Query, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

use super::domain::PropertyId;
use super::mortgage::MortgageTerms;
use super::query::SearchQuery;
use super::service::{ListingService, ListingServiceError};

/// Router builder exposing the listing search and lookup endpoints.
pub fn listing_router(service: Arc<ListingService>) -> Router {
    Router::new()
        .route("/api/v1/properties", get(search_handler))
        .route("/api/v1/properties/featured", get(featured_handler))
        .route("/api/v1/properties/:property_id", get(listing_handler))
        .route(
            "/api/v1/properties/:property_id/mortgage",
            get(mortgage_handler),
        )
        .route("/api/v1/locations", get(locations_handler))
        .route("/api/v1/catalog/reload", post(reload_handler))
        .with_state(service)
}

pub(crate) async fn search_handler(
    State(service): State<Arc<ListingService>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let query = SearchQuery::from_query_string(raw.as_deref().unwrap_or_default());
    let response = service.search(query);
    debug!(
        query = %response.query,
        total = response.results.total,
        "listing search served"
    );
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn featured_handler(State(service): State<Arc<ListingService>>) -> Response {
    (StatusCode::OK, Json(service.featured())).into_response()
}

pub(crate) async fn listing_handler(
    State(service): State<Arc<ListingService>>,
    Path(property_id): Path<String>,
) -> Response {
    match service.get(&PropertyId(property_id)) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn mortgage_handler(
    State(service): State<Arc<ListingService>>,
    Path(property_id): Path<String>,
    Query(terms): Query<MortgageTerms>,
) -> Response {
    match service.mortgage(&PropertyId(property_id), terms) {
        Ok(estimate) => (StatusCode::OK, Json(estimate)).into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocationParams {
    #[serde(default)]
    q: String,
}

pub(crate) async fn locations_handler(
    State(service): State<Arc<ListingService>>,
    Query(params): Query<LocationParams>,
) -> Response {
    (StatusCode::OK, Json(service.suggest_locations(&params.q))).into_response()
}

pub(crate) async fn reload_handler(State(service): State<Arc<ListingService>>) -> Response {
    let outcome = tokio::task::spawn_blocking(move || service.reload()).await;
    match outcome {
        Ok(Ok(outcome)) => (StatusCode::OK, Json(outcome)).into_response(),
        Ok(Err(err)) => error_response(err),
        Err(join_error) => {
            error!(%join_error, "catalog reload task failed");
            let payload = json!({ "error": "catalog reload interrupted" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn error_response(err: ListingServiceError) -> Response {
    let status = match &err {
        ListingServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ListingServiceError::Mortgage(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ListingServiceError::Catalog(_) => {
            error!(error = %err, "listing catalog unavailable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
