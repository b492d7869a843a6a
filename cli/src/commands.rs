use anyhow::Result;
use pdf_qa_client::{
    AskOutcome, DragEvent, PageController, PageView, QaBackend, SelectedFile, StatusKind,
    StatusMessage, UploadOutcome,
};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Drops the first path on the upload area. Later paths are never read,
/// since the page would ignore them anyway.
pub async fn upload<B: QaBackend, V: PageView>(
    page: &mut PageController<B, V>,
    paths: &[PathBuf],
) -> bool {
    let Some(first) = paths.first() else {
        eprintln!("No PDF given. Usage: pdf-qa upload <PATH>");
        return false;
    };
    if paths.len() > 1 {
        log::debug!("{} paths given, only {} is used", paths.len(), first.display());
    }

    let file = match SelectedFile::from_path(first).await {
        Ok(file) => file,
        Err(e) => {
            page.view_mut()
                .set_status(StatusMessage::new(e.to_string(), StatusKind::Error));
            return false;
        }
    };

    matches!(
        page.handle_drag(DragEvent::Drop(vec![file])).await,
        UploadOutcome::Uploaded { .. }
    )
}

pub async fn ask<B: QaBackend, V: PageView>(
    page: &mut PageController<B, V>,
    question: &str,
) -> bool {
    page.view_mut().set_question_text(question);
    match page.submit_question().await {
        AskOutcome::Answered => true,
        AskOutcome::Skipped => {
            eprintln!("Nothing to ask.");
            false
        }
        AskOutcome::Failed { .. } => false,
    }
}

/// Line-driven session: `:upload <path>`, `:upload`, `:quit`, or a question.
/// Leaving, by `:quit` or end of input, closes the page.
pub async fn session<B, V, R, W>(
    page: &mut PageController<B, V>,
    input: R,
    mut output: W,
) -> Result<()>
where
    B: QaBackend,
    V: PageView,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output
        .write_all("📄 PDF Q&A session. `:upload <path>` to load a PDF, `:quit` to leave.\n".as_bytes())
        .await?;

    let mut lines = input.lines();
    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();

        if line == ":quit" {
            break;
        } else if line == ":upload" {
            page.click_upload_area();
        } else if let Some(path) = line.strip_prefix(":upload ") {
            upload(page, &[PathBuf::from(path.trim())]).await;
        } else if !line.is_empty() {
            ask(page, line).await;
        }
    }

    page.close().await;
    output.write_all("👋 Bye\n".as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pdf_qa_client::{
        BackendError, CleanupResponse, MemoryPage, QueryResponse, UploadResponse,
    };
    use std::io::Write;
    use std::sync::Mutex;
    use tokio::io::BufReader;

    #[derive(Default)]
    struct RecordingBackend {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingBackend {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QaBackend for RecordingBackend {
        async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, BackendError> {
            self.calls.lock().unwrap().push(format!("upload {}", file.name));
            Ok(UploadResponse {
                filename: Some(file.name.clone()),
                ..UploadResponse::default()
            })
        }

        async fn query(&self, question: &str) -> Result<QueryResponse, BackendError> {
            self.calls.lock().unwrap().push(format!("query {}", question));
            Ok(QueryResponse {
                answer: "A".to_string(),
                pdf_name: "doc.pdf".to_string(),
                sources: vec!["s1".to_string()],
            })
        }

        async fn cleanup(&self) -> Result<CleanupResponse, BackendError> {
            self.calls.lock().unwrap().push("cleanup".to_string());
            Ok(CleanupResponse::default())
        }
    }

    fn page() -> PageController<RecordingBackend, MemoryPage> {
        PageController::new(RecordingBackend::default(), MemoryPage::new())
    }

    fn temp_pdf() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.4").unwrap();
        file
    }

    fn file_name(file: &tempfile::NamedTempFile) -> String {
        file.path().file_name().unwrap().to_string_lossy().to_string()
    }

    async fn run_session(page: &mut PageController<RecordingBackend, MemoryPage>, script: &str) {
        session(page, BufReader::new(script.as_bytes()), tokio::io::sink())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn blank_question_fails_without_a_call() {
        let mut page = page();

        assert!(!ask(&mut page, "   ").await);
        assert!(page.backend().calls().is_empty());
    }

    #[tokio::test]
    async fn question_is_answered() {
        let mut page = page();

        assert!(ask(&mut page, "what is it?").await);
        assert_eq!(page.backend().calls(), vec!["query what is it?"]);
        assert!(page.view().response_html.contains("<p>A</p>"));
    }

    #[tokio::test]
    async fn upload_without_paths_does_nothing() {
        let mut page = page();

        assert!(!upload(&mut page, &[]).await);
        assert!(page.backend().calls().is_empty());
        assert_eq!(page.view().file_picker_opens, 0);
    }

    #[tokio::test]
    async fn unreadable_path_shows_error_status() {
        let mut page = page();

        assert!(!upload(&mut page, &[PathBuf::from("/no/such/dir/doc.pdf")]).await);

        let status = page.view().status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.starts_with("failed to read"));
        assert!(page.backend().calls().is_empty());
    }

    #[tokio::test]
    async fn only_first_path_is_read() {
        let pdf = temp_pdf();
        let mut page = page();

        let paths = [pdf.path().to_path_buf(), PathBuf::from("/no/such/dir/other.pdf")];
        assert!(upload(&mut page, &paths).await);

        assert_eq!(page.backend().calls(), vec![format!("upload {}", file_name(&pdf))]);
        assert!(page.view().query_section_visible);
    }

    #[tokio::test]
    async fn session_upload_line_goes_through_drop() {
        let pdf = temp_pdf();
        let mut page = page();
        let script = format!(":upload {}\n\nwhat is it?\n:quit\n", pdf.path().display());

        run_session(&mut page, &script).await;

        assert_eq!(
            page.backend().calls(),
            vec![
                format!("upload {}", file_name(&pdf)),
                "query what is it?".to_string(),
                "cleanup".to_string(),
            ]
        );
        assert!(!page.view().upload_highlighted);
        assert_eq!(
            page.view().status_text(),
            Some(format!("{} uploaded successfully!", file_name(&pdf)).as_str())
        );
    }

    #[tokio::test]
    async fn quit_cleans_up_and_stops_reading() {
        let mut page = page();

        run_session(&mut page, ":quit\nnever asked\n").await;

        assert_eq!(page.backend().calls(), vec!["cleanup"]);
    }

    #[tokio::test]
    async fn end_of_input_cleans_up() {
        let mut page = page();

        run_session(&mut page, "first\nsecond").await;

        assert_eq!(
            page.backend().calls(),
            vec!["query first", "query second", "cleanup"]
        );
    }

    #[tokio::test]
    async fn bare_upload_opens_picker() {
        let mut page = page();

        run_session(&mut page, ":upload\n").await;

        assert_eq!(page.view().file_picker_opens, 1);
        assert_eq!(page.backend().calls(), vec!["cleanup"]);
    }

    #[tokio::test]
    async fn session_upload_of_missing_file_shows_error() {
        let mut page = page();

        run_session(&mut page, ":upload /no/such/dir/doc.pdf\n").await;

        assert_eq!(page.view().status.clone().unwrap().kind, StatusKind::Error);
        assert_eq!(page.backend().calls(), vec!["cleanup"]);
    }
}
