use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use tracing::warn;

use backend_application::commands::file_commands;
use backend_application::queries::file_queries;
use backend_application::AppState;
use backend_domain::{FileTable, StoredFile, UploadOutcome};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn upload_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<UploadOutcome>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }

    let mut file: Option<(String, Vec<u8>)> = None;
    let mut document_id: Option<String> = None;
    while let Some(field) = multipart.next_field().await.map_err(|err| {
        warn!("rejected malformed multipart body: {}", err);
        HttpError::BadRequest(err.to_string())
    })? {
        match field.name() {
            Some("file") => {
                let name = field.file_name().unwrap_or("upload.xlsx").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| HttpError::BadRequest(err.to_string()))?;
                file = Some((name, bytes.to_vec()));
            }
            Some("documentId") => {
                let value = field
                    .text()
                    .await
                    .map_err(|err| HttpError::BadRequest(err.to_string()))?;
                document_id = Some(value);
            }
            _ => {}
        }
    }

    let (file_name, bytes) =
        file.ok_or_else(|| HttpError::BadRequest("missing file field".to_string()))?;
    let document_id =
        document_id.ok_or_else(|| HttpError::BadRequest("missing documentId field".to_string()))?;

    let outcome = file_commands::upload_catalog(&state, &file_name, &document_id, bytes).await?;
    Ok(Json(outcome))
}

pub async fn list_files(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<StoredFile>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let files = file_queries::list_files(&state).await?;
    Ok(Json(files))
}

pub async fn fetch_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(file_id): Path<String>,
) -> Result<Json<FileTable>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let table = file_queries::fetch_file(&state, &file_id).await?;
    Ok(Json(table))
}

pub async fn delete_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(file_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    file_commands::delete_file(&state, &file_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
