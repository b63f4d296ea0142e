use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::analytics_queries::{
    self, AvailableDatesQuery, ScanSeriesQuery,
};
use backend_application::AppState;
use backend_domain::{AvailableDates, OrderSummary, ScanSeries};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn available_dates(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AvailableDatesQuery>,
) -> Result<Json<AvailableDates>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let dates = analytics_queries::available_dates(&state, query).await?;
    Ok(Json(dates))
}

pub async fn scan_series(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ScanSeriesQuery>,
) -> Result<Json<ScanSeries>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let series = analytics_queries::scan_series(&state, query).await?;
    Ok(Json(series))
}

pub async fn order_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<OrderSummary>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let summary = analytics_queries::order_summary(&state).await?;
    Ok(Json(summary))
}
