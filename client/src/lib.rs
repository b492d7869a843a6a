pub mod models;
pub mod error;
pub mod config;
pub mod backend;
pub mod http_backend;
pub mod selection;
pub mod render;
pub mod view;
pub mod controller;

pub use models::*;
pub use error::{BackendError, SelectionError};
pub use config::ClientConfig;
pub use backend::QaBackend;
pub use http_backend::HttpBackend;
pub use render::ResponseFragment;
pub use view::{MemoryPage, PageView};
pub use controller::{AskOutcome, ControllerState, DragEvent, PageController, UploadOutcome};
