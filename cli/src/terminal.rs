use pdf_qa_client::{PageView, ResponseFragment, StatusKind, StatusMessage};

/// Prints page updates to the terminal instead of mutating a DOM.
#[derive(Debug, Default)]
pub struct TerminalView {
    question: String,
    query_ready: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageView for TerminalView {
    fn set_status(&mut self, status: StatusMessage) {
        let marker = match status.kind {
            StatusKind::Info => "…",
            StatusKind::Success => "✅",
            StatusKind::Error => "❌",
        };
        match status.kind {
            StatusKind::Error => eprintln!("{} {}", marker, status.text),
            _ => println!("{} {}", marker, status.text),
        }
    }

    fn show_query_section(&mut self) {
        if !self.query_ready {
            println!("Ask a question about the document.");
        }
        self.query_ready = true;
    }

    fn set_upload_highlight(&mut self, _on: bool) {}

    fn open_file_picker(&mut self) {
        println!("Use `:upload <path>` to choose a PDF.");
    }

    fn question_text(&self) -> String {
        self.question.clone()
    }

    fn set_question_text(&mut self, text: &str) {
        self.question = text.to_string();
    }

    fn set_loading(&mut self, visible: bool) {
        if visible {
            println!("🔍 Thinking...");
        }
    }

    fn clear_response(&mut self) {}

    fn render_response(&mut self, fragment: &ResponseFragment) {
        match fragment {
            ResponseFragment::Answer(_) => println!("\n{}", fragment.to_text()),
            ResponseFragment::Error(_) => eprintln!("{}", fragment.to_text()),
        }
    }
}
