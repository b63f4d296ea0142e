use std::collections::BTreeMap;

use tracing::error;

use backend_domain::{AccountUser, TelegramUser};

use crate::{AppError, AppState};

pub async fn list_telegram_users(
    state: &AppState,
) -> Result<BTreeMap<String, TelegramUser>, AppError> {
    let users = state
        .users
        .list_telegram_users()
        .await
        .map_err(|err| {
            error!("failed to list telegram users: {}", err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?
        .unwrap_or_default();
    Ok(users)
}

pub async fn list_accounts(state: &AppState) -> Result<BTreeMap<String, AccountUser>, AppError> {
    let accounts = state
        .users
        .list_accounts()
        .await
        .map_err(|err| {
            error!("failed to list accounts: {}", err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?
        .unwrap_or_default();
    Ok(accounts)
}
