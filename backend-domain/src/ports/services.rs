use async_trait::async_trait;

use crate::entities::{FileTable, StoredFile, UploadOutcome};

/// Front for the external upload API: it parses the spreadsheet and stores
/// the table; this backend only relays bytes and results.
#[async_trait]
pub trait FileTransferService: Send + Sync {
    async fn upload(
        &self,
        file_name: &str,
        document_id: &str,
        bytes: Vec<u8>,
    ) -> anyhow::Result<UploadOutcome>;
    async fn list_files(&self) -> anyhow::Result<Vec<StoredFile>>;
    async fn fetch_file(&self, file_id: &str) -> anyhow::Result<Option<FileTable>>;
    async fn delete_file(&self, file_id: &str) -> anyhow::Result<bool>;
}
