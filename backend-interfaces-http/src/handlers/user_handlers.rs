use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use backend_application::commands::user_commands;
use backend_application::queries::user_queries;
use backend_application::AppState;
use backend_domain::{AccountUser, TelegramUser};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_telegram_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<BTreeMap<String, TelegramUser>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let users = user_queries::list_telegram_users(&state).await?;
    Ok(Json(users))
}

pub async fn update_telegram_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<String>,
    Json(payload): Json<TelegramUser>,
) -> Result<Json<TelegramUser>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let saved = user_commands::save_telegram_user(&state, &chat_id, payload).await?;
    Ok(Json(saved))
}

pub async fn delete_telegram_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    user_commands::delete_telegram_user(&state, &chat_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_accounts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<BTreeMap<String, AccountUser>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let accounts = user_queries::list_accounts(&state).await?;
    Ok(Json(accounts))
}

pub async fn update_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    Json(payload): Json<AccountUser>,
) -> Result<Json<AccountUser>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let saved = user_commands::save_account(&state, &user_id, payload).await?;
    Ok(Json(saved))
}
