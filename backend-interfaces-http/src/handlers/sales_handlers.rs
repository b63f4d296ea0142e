use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::sales_queries::{self, SalesQuery};
use backend_application::AppState;
use backend_domain::SalesReport;

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_sales(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SalesQuery>,
) -> Result<Json<SalesReport>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let report = sales_queries::sales_report(&state, query).await?;
    Ok(Json(report))
}
