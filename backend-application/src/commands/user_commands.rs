use tracing::error;

use backend_domain::{AccountUser, TelegramUser};

use crate::{AppError, AppState};

pub async fn save_telegram_user(
    state: &AppState,
    chat_id: &str,
    user: TelegramUser,
) -> Result<TelegramUser, AppError> {
    let chat_id = chat_id.trim();
    if chat_id.is_empty() {
        return Err(AppError::BadRequest("chatId must not be empty".to_string()));
    }
    let user = user.normalized(chat_id);
    state
        .users
        .save_telegram_user(chat_id, &user)
        .await
        .map_err(|err| {
            error!("failed to save telegram user {}: {}", chat_id, err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?;
    Ok(user)
}

pub async fn delete_telegram_user(state: &AppState, chat_id: &str) -> Result<(), AppError> {
    let chat_id = chat_id.trim();
    if chat_id.is_empty() {
        return Err(AppError::BadRequest("chatId must not be empty".to_string()));
    }
    state
        .users
        .delete_telegram_user(chat_id)
        .await
        .map_err(|err| {
            error!("failed to delete telegram user {}: {}", chat_id, err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })
}

pub async fn save_account(
    state: &AppState,
    user_id: &str,
    account: AccountUser,
) -> Result<AccountUser, AppError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::BadRequest("userId must not be empty".to_string()));
    }
    state
        .users
        .save_account(user_id, &account)
        .await
        .map_err(|err| {
            error!("failed to save account {}: {}", user_id, err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?;
    Ok(account)
}
