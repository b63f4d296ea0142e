// Client for the external upload API that parses and stores catalogs

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use backend_domain::ports::FileTransferService;
use backend_domain::{FileTable, StoredFile, UploadOutcome};

pub struct HttpFileTransferService {
    client: Client,
    api_url: String,
}

#[derive(Deserialize)]
struct FilesEnvelope {
    #[serde(default)]
    files: Vec<StoredFile>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl HttpFileTransferService {
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }
}

#[async_trait]
impl FileTransferService for HttpFileTransferService {
    async fn upload(
        &self,
        file_name: &str,
        document_id: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadOutcome> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new()
            .part("file", part)
            .text("documentId", document_id.to_string());

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .context("upload request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| status.to_string());
            return Err(anyhow!("upload rejected: {}", message));
        }
        response
            .json::<UploadOutcome>()
            .await
            .context("malformed upload response")
    }

    async fn list_files(&self) -> Result<Vec<StoredFile>> {
        let response = self
            .client
            .get(self.endpoint("files"))
            .send()
            .await
            .context("files listing failed")?
            .error_for_status()
            .context("files listing rejected")?;
        let envelope: FilesEnvelope = response
            .json()
            .await
            .context("malformed files listing response")?;
        Ok(envelope.files)
    }

    async fn fetch_file(&self, file_id: &str) -> Result<Option<FileTable>> {
        let response = self
            .client
            .get(self.endpoint(&format!("files/{}", file_id)))
            .send()
            .await
            .with_context(|| format!("file fetch failed: {}", file_id))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let table: FileTable = response
            .error_for_status()
            .with_context(|| format!("file fetch rejected: {}", file_id))?
            .json()
            .await
            .with_context(|| format!("malformed file payload: {}", file_id))?;
        Ok(Some(table))
    }

    async fn delete_file(&self, file_id: &str) -> Result<bool> {
        let response = self
            .client
            .delete(self.endpoint(&format!("files/{}", file_id)))
            .send()
            .await
            .with_context(|| format!("file delete failed: {}", file_id))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        response
            .error_for_status()
            .with_context(|| format!("file delete rejected: {}", file_id))?;
        Ok(true)
    }
}
