use serde::Deserialize;
use tracing::error;

use backend_domain::{build_sales_report, SalesFilter, SalesReport};

use crate::{AppError, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct SalesQuery {
    pub client: Option<String>,
    /// `YYYY-MM`
    pub month: Option<String>,
    /// `YYYY`
    pub year: Option<String>,
}

pub async fn sales_report(state: &AppState, query: SalesQuery) -> Result<SalesReport, AppError> {
    let orders = state
        .sales
        .fetch_sales_orders()
        .await
        .map_err(|err| {
            error!("failed to fetch sales orders: {}", err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?
        .unwrap_or_default();

    let filter = SalesFilter {
        client: normalize(query.client),
        month: normalize(query.month),
        year: normalize(query.year),
    };
    Ok(build_sales_report(&orders, &filter))
}

fn normalize(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
