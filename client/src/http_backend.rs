use crate::backend::QaBackend;
use crate::config::ClientConfig;
use crate::error::BackendError;
use crate::models::*;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::future::Future;

/// `QaBackend` over HTTP against the page's own server.
pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn with_timeout<T, F>(&self, request: F) -> Result<T, BackendError>
    where
        F: Future<Output = Result<T, BackendError>>,
    {
        match self.config.request_timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| BackendError::Timeout)?,
            None => request.await,
        }
    }
}

/// Reads the body of a response. A success status must carry `T`; any other
/// status is turned into `BackendError::Server` with the body's `error` text
/// when the server sent one.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))
    } else {
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.error);
        log::warn!("Server answered {}: {:?}", status, message);
        Err(BackendError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl QaBackend for HttpBackend {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, BackendError> {
        let url = self.config.endpoint("/upload");
        log::debug!("Uploading {} ({} bytes) to {}", file.name, file.bytes.len(), url);

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)?;
        let form = Form::new().part("file", part);

        self.with_timeout(async {
            let response = self.client.post(&url).multipart(form).send().await?;
            read_json(response).await
        })
        .await
    }

    async fn query(&self, question: &str) -> Result<QueryResponse, BackendError> {
        let url = self.config.endpoint("/query");
        log::debug!("Querying {}", url);

        let request = QueryRequest {
            question: question.to_string(),
        };

        self.with_timeout(async {
            let response = self.client.post(&url).json(&request).send().await?;
            read_json(response).await
        })
        .await
    }

    async fn cleanup(&self) -> Result<CleanupResponse, BackendError> {
        let url = self.config.endpoint("/cleanup");
        log::debug!("Requesting cleanup at {}", url);

        self.with_timeout(async {
            let response = self.client.post(&url).send().await?;
            read_json(response).await
        })
        .await
    }
}
