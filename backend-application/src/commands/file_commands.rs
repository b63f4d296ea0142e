use tracing::error;

use backend_domain::UploadOutcome;

use crate::{AppError, AppState};

/// Relays a catalog spreadsheet to the upload API and returns its parsed
/// table plus the stored document id.
pub async fn upload_catalog(
    state: &AppState,
    file_name: &str,
    document_id: &str,
    bytes: Vec<u8>,
) -> Result<UploadOutcome, AppError> {
    let document_id = document_id.trim();
    if document_id.is_empty() {
        return Err(AppError::BadRequest(
            "documentId must not be empty".to_string(),
        ));
    }
    if bytes.is_empty() {
        return Err(AppError::BadRequest("file must not be empty".to_string()));
    }

    state.metrics.record_upload();
    state
        .files
        .upload(file_name, document_id, bytes)
        .await
        .map_err(|err| {
            state.metrics.record_upload_error();
            error!("upload of {} failed: {}", document_id, err);
            AppError::Internal(err)
        })
}

pub async fn delete_file(state: &AppState, file_id: &str) -> Result<(), AppError> {
    let deleted = state.files.delete_file(file_id).await.map_err(|err| {
        error!("failed to delete stored file {}: {}", file_id, err);
        AppError::Internal(err)
    })?;
    if deleted {
        Ok(())
    } else {
        Err(AppError::NotFound)
    }
}
