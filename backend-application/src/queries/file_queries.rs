use tracing::error;

use backend_domain::{FileTable, StoredFile};

use crate::{AppError, AppState};

pub async fn list_files(state: &AppState) -> Result<Vec<StoredFile>, AppError> {
    state.files.list_files().await.map_err(|err| {
        error!("failed to list stored files: {}", err);
        AppError::Internal(err)
    })
}

pub async fn fetch_file(state: &AppState, file_id: &str) -> Result<FileTable, AppError> {
    let table = state.files.fetch_file(file_id).await.map_err(|err| {
        error!("failed to fetch stored file {}: {}", file_id, err);
        AppError::Internal(err)
    })?;
    table.ok_or(AppError::NotFound)
}
