use crate::error::BackendError;
use crate::models::*;
use async_trait::async_trait;

/// Network side of the page. The controller only talks to the server through
/// this trait, so tests can substitute a scripted backend.
#[async_trait]
pub trait QaBackend: Send + Sync {
    /// `POST /upload` with the file as multipart field `file`.
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, BackendError>;

    /// `POST /query` with `{"question": ...}`.
    async fn query(&self, question: &str) -> Result<QueryResponse, BackendError>;

    /// `POST /cleanup`, releasing whatever the server holds for this session.
    async fn cleanup(&self) -> Result<CleanupResponse, BackendError>;
}
