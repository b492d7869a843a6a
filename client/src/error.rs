use thiserror::Error;

/// Failure of a call to the upload, query or cleanup endpoint.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The server answered with a non-ok status.
    #[error("{}", describe_server_error(.status, .message))]
    Server { status: u16, message: Option<String> },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
}

impl BackendError {
    /// Error text supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            BackendError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

fn describe_server_error(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.to_string(),
        None => format!("Request failed with status {}", status),
    }
}

/// Reasons a selected file is not sent to the server.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Please upload a PDF file")]
    NotPdf { mime: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
