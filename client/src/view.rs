use crate::models::StatusMessage;
use crate::render::ResponseFragment;

/// Page elements the controller drives: the upload area and its status
/// line, the query section with its question field, the loading indicator
/// and the response area.
pub trait PageView {
    fn set_status(&mut self, status: StatusMessage);
    fn show_query_section(&mut self);
    fn set_upload_highlight(&mut self, on: bool);
    fn open_file_picker(&mut self);

    fn question_text(&self) -> String;
    fn set_question_text(&mut self, text: &str);

    fn set_loading(&mut self, visible: bool);
    fn clear_response(&mut self);
    fn render_response(&mut self, fragment: &ResponseFragment);
}

/// In-memory page: keeps what a browser would show, with the response area
/// as an HTML string.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    pub status: Option<StatusMessage>,
    pub query_section_visible: bool,
    pub upload_highlighted: bool,
    pub file_picker_opens: usize,
    pub question_input: String,
    pub loading_visible: bool,
    pub response_html: String,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }
}

impl PageView for MemoryPage {
    fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    fn show_query_section(&mut self) {
        self.query_section_visible = true;
    }

    fn set_upload_highlight(&mut self, on: bool) {
        self.upload_highlighted = on;
    }

    fn open_file_picker(&mut self) {
        self.file_picker_opens += 1;
    }

    fn question_text(&self) -> String {
        self.question_input.clone()
    }

    fn set_question_text(&mut self, text: &str) {
        self.question_input = text.to_string();
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn clear_response(&mut self) {
        self.response_html.clear();
    }

    fn render_response(&mut self, fragment: &ResponseFragment) {
        self.response_html = fragment.to_html();
    }
}
