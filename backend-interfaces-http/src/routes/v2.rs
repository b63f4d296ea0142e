use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    analytics_handlers, file_handlers, ops_handlers, sales_handlers, settings_handlers,
    user_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v2/analytics/available-dates",
            axum::routing::get(analytics_handlers::available_dates),
        )
        .route(
            "/v2/analytics/scan-series",
            axum::routing::get(analytics_handlers::scan_series),
        )
        .route(
            "/v2/analytics/order-summary",
            axum::routing::get(analytics_handlers::order_summary),
        )
        .route(
            "/v2/sales/orders",
            axum::routing::get(sales_handlers::list_sales),
        )
        .route(
            "/v2/settings/scan-threshold",
            axum::routing::get(settings_handlers::get_threshold_settings)
                .put(settings_handlers::update_threshold_settings),
        )
        .route(
            "/v2/users/telegram",
            axum::routing::get(user_handlers::list_telegram_users),
        )
        .route(
            "/v2/users/telegram/:chat_id",
            axum::routing::put(user_handlers::update_telegram_user)
                .delete(user_handlers::delete_telegram_user),
        )
        .route(
            "/v2/users/accounts",
            axum::routing::get(user_handlers::list_accounts),
        )
        .route(
            "/v2/users/accounts/:user_id",
            axum::routing::put(user_handlers::update_account),
        )
        .route(
            "/v2/files/upload",
            axum::routing::post(file_handlers::upload_file),
        )
        .route("/v2/files", axum::routing::get(file_handlers::list_files))
        .route(
            "/v2/files/:file_id",
            axum::routing::get(file_handlers::fetch_file).delete(file_handlers::delete_file),
        )
        .route(
            "/v2/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/v2/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/v2/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
