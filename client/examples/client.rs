use pdf_qa_client::{ClientConfig, HttpBackend, MemoryPage, PageController, PageView, SelectedFile};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: client <file.pdf> [question]"))?;
    let question = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "What are the main topics discussed in this document?".to_string());

    println!("🔍 Testing PDF Q&A page against {}", config.base_url);
    let mut page = PageController::new(HttpBackend::new(config)?, MemoryPage::new());

    println!("\n📤 Upload:");
    page.handle_files(vec![SelectedFile::from_path(&path).await?]).await;
    println!("Status: {:?}", page.view().status);

    println!("\n❓ Query:");
    page.view_mut().set_question_text(&question);
    page.submit_question().await;
    println!("Response HTML: {}", page.view().response_html);

    page.close().await;
    println!("\n✅ Client test completed!");
    Ok(())
}
