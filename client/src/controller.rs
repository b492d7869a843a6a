use crate::backend::QaBackend;
use crate::models::*;
use crate::render::ResponseFragment;
use crate::selection::pick_upload;
use crate::view::PageView;

const UPLOADING_TEXT: &str = "Uploading and processing PDF...";
const UPLOAD_FAILED_TEXT: &str = "Error uploading file";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    Uploading,
    Querying,
}

/// Pointer events on the upload area.
#[derive(Debug, Clone)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    Drop(Vec<SelectedFile>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Nothing was selected.
    Ignored,
    /// The file failed local validation and was not sent.
    Rejected,
    Uploaded { filename: String },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    /// The question field was blank.
    Skipped,
    Answered,
    Failed { message: String },
}

/// Drives one page: owns the view it writes to and the backend it calls.
pub struct PageController<B, V> {
    backend: B,
    view: V,
    state: ControllerState,
}

impl<B: QaBackend, V: PageView> PageController<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view,
            state: ControllerState::Idle,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn transition(&mut self, next: ControllerState) {
        log::debug!("Controller {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub async fn handle_drag(&mut self, event: DragEvent) -> UploadOutcome {
        match event {
            DragEvent::Enter | DragEvent::Over => {
                self.view.set_upload_highlight(true);
                UploadOutcome::Ignored
            }
            DragEvent::Leave => {
                self.view.set_upload_highlight(false);
                UploadOutcome::Ignored
            }
            DragEvent::Drop(files) => {
                self.view.set_upload_highlight(false);
                self.handle_files(files).await
            }
        }
    }

    /// A click on the upload area opens the file picker; the picker's
    /// selection comes back through [`PageController::handle_files`].
    pub fn click_upload_area(&mut self) {
        self.view.open_file_picker();
    }

    pub async fn handle_files(&mut self, files: Vec<SelectedFile>) -> UploadOutcome {
        match pick_upload(files) {
            Ok(Some(file)) => self.upload(file).await,
            Ok(None) => UploadOutcome::Ignored,
            Err(err) => {
                self.view
                    .set_status(StatusMessage::new(err.to_string(), StatusKind::Error));
                UploadOutcome::Rejected
            }
        }
    }

    pub async fn upload(&mut self, file: SelectedFile) -> UploadOutcome {
        self.view
            .set_status(StatusMessage::new(UPLOADING_TEXT, StatusKind::Info));
        self.transition(ControllerState::Uploading);

        let result = self.backend.upload(&file).await;
        self.transition(ControllerState::Idle);

        match result {
            Ok(response) => {
                let filename = response.filename.unwrap_or(file.name);
                log::info!("Uploaded {}", filename);
                self.view.set_status(StatusMessage::new(
                    format!("{} uploaded successfully!", filename),
                    StatusKind::Success,
                ));
                self.view.show_query_section();
                UploadOutcome::Uploaded { filename }
            }
            Err(err) => {
                log::warn!("Upload of {} failed: {}", file.name, err);
                let message = err
                    .server_message()
                    .unwrap_or(UPLOAD_FAILED_TEXT)
                    .to_string();
                self.view
                    .set_status(StatusMessage::new(message.clone(), StatusKind::Error));
                UploadOutcome::Failed { message }
            }
        }
    }

    pub async fn submit_question(&mut self) -> AskOutcome {
        let question = self.view.question_text().trim().to_string();
        if question.is_empty() {
            return AskOutcome::Skipped;
        }

        self.view.set_loading(true);
        self.view.clear_response();
        self.view.set_question_text("");
        self.transition(ControllerState::Querying);

        let result = self.backend.query(&question).await;

        let outcome = match result {
            Ok(response) => {
                self.view
                    .render_response(&ResponseFragment::Answer(response));
                AskOutcome::Answered
            }
            Err(err) => {
                log::warn!("Query failed: {}", err);
                let message = err.to_string();
                self.view
                    .render_response(&ResponseFragment::Error(message.clone()));
                AskOutcome::Failed { message }
            }
        };

        self.view.set_loading(false);
        self.transition(ControllerState::Idle);
        outcome
    }

    /// Page close: asks the server to drop the uploaded document. Nothing is
    /// shown to the user either way.
    pub async fn close(&mut self) {
        match self.backend.cleanup().await {
            Ok(response) => {
                log::debug!("Cleanup: {}", response.message.unwrap_or_default())
            }
            Err(err) => log::warn!("Cleanup failed: {}", err),
        }
    }
}
