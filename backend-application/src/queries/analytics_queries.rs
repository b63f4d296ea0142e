use chrono::{Datelike, Local};
use serde::Deserialize;
use tracing::error;

use backend_domain::services::{assemble_series, summarize_orders};
use backend_domain::{
    ActorFilter, AvailableDates, DataDate, OrderSummary, ScanSeries, TimeInterval,
};

use crate::{AppError, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct AvailableDatesQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScanSeriesQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub user: Option<String>,
    pub action: Option<String>,
    pub interval: Option<u32>,
}

/// Months (and days, once a month is fixed) with stored data, most recent
/// first. An empty store answers with empty lists, never an error.
pub async fn available_dates(
    state: &AppState,
    query: AvailableDatesQuery,
) -> Result<AvailableDates, AppError> {
    let year = query.year.unwrap_or_else(|| Local::now().year());
    let mut months = state.scan_logs.fetch_months(year).await.map_err(|err| {
        error!("failed to fetch months with data: {}", err);
        state.metrics.record_store_error();
        AppError::Internal(err)
    })?;
    months.sort_unstable_by(|a, b| b.cmp(a));

    let mut available = AvailableDates {
        year,
        months,
        month: None,
        days: Vec::new(),
    };
    if let Some(month) = query.month {
        let mut days = state
            .scan_logs
            .fetch_days(year, month)
            .await
            .map_err(|err| {
                error!("failed to fetch days with data: {}", err);
                state.metrics.record_store_error();
                AppError::Internal(err)
            })?;
        days.sort_unstable_by(|a, b| b.cmp(a));
        available.month = Some(month);
        available.days = days;
    }
    Ok(available)
}

/// The scan-series view model for one day. Filter or interval changes
/// recompute the whole series from the raw event set.
pub async fn scan_series(state: &AppState, query: ScanSeriesQuery) -> Result<ScanSeries, AppError> {
    state.metrics.record_series_request();

    let interval = match query.interval {
        None => TimeInterval::default(),
        Some(raw) => TimeInterval::try_from(raw).map_err(AppError::BadRequest)?,
    };
    let user = ActorFilter::from(query.user);
    let action = ActorFilter::from(query.action);

    let Some(date) = resolve_date(state, query.year, query.month, query.day).await? else {
        return Ok(ScanSeries::empty(None));
    };

    let events = state
        .scan_logs
        .fetch_scan_events(date.year, date.month, date.day)
        .await
        .map_err(|err| {
            error!("failed to fetch scan events: {}", err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?;
    let Some(events) = events else {
        return Ok(ScanSeries::empty(Some(date)));
    };

    let series = assemble_series(date, &events, &user, &action, interval);
    state.metrics.record_dropped_log_ids(series.dropped_log_ids);
    Ok(series)
}

/// Weight/volume/count headline totals joined from orders and placement
/// parameters. Both fetches are independent and run concurrently; the join
/// itself waits for both.
pub async fn order_summary(state: &AppState) -> Result<OrderSummary, AppError> {
    state.metrics.record_summary_request();

    let (orders, params) = tokio::join!(
        state.orders.fetch_orders(),
        state.orders.fetch_placement_parameters(),
    );
    let orders = orders
        .map_err(|err| {
            error!("failed to fetch orders: {}", err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?
        .unwrap_or_default();
    let params = params
        .map_err(|err| {
            error!("failed to fetch placement parameters: {}", err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?
        .unwrap_or_default();

    Ok(summarize_orders(&orders, &params))
}

/// Resolves the requested scope to a day that actually holds data. A
/// missing month or day snaps to the most recent available one; `None`
/// means the store has nothing for the year at all.
async fn resolve_date(
    state: &AppState,
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
) -> Result<Option<DataDate>, AppError> {
    let today = Local::now();
    let year = year.unwrap_or_else(|| today.year());

    let mut months = state.scan_logs.fetch_months(year).await.map_err(|err| {
        error!("failed to fetch months with data: {}", err);
        state.metrics.record_store_error();
        AppError::Internal(err)
    })?;
    months.sort_unstable_by(|a, b| b.cmp(a));
    if months.is_empty() {
        return Ok(None);
    }
    let requested_month = month.unwrap_or_else(|| today.month());
    let month = if months.contains(&requested_month) {
        requested_month
    } else {
        months[0]
    };

    let mut days = state.scan_logs.fetch_days(year, month).await.map_err(|err| {
        error!("failed to fetch days with data: {}", err);
        state.metrics.record_store_error();
        AppError::Internal(err)
    })?;
    days.sort_unstable_by(|a, b| b.cmp(a));
    if days.is_empty() {
        return Ok(None);
    }
    let requested_day = day.unwrap_or_else(|| today.day());
    let day = if days.contains(&requested_day) {
        requested_day
    } else {
        days[0]
    };

    Ok(Some(DataDate::new(year, month, day)))
}
