mod commands;
mod terminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pdf_qa_client::{ClientConfig, HttpBackend, PageController, QaBackend};
use std::path::PathBuf;
use terminal::TerminalView;
use tokio::io::BufReader;

#[derive(Parser)]
#[command(name = "pdf-qa", about = "Upload a PDF and ask questions about it")]
struct Cli {
    /// Server address, overrides PDF_QA_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload a PDF; only the first path is used
    Upload { paths: Vec<PathBuf> },
    /// Ask a question about the uploaded PDF
    Ask {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Tell the server to discard the uploaded PDF
    Cleanup,
    /// Interactive session, cleaned up on exit
    Session,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    log::info!("Using server at {}", config.base_url);

    let backend = HttpBackend::new(config)?;
    let mut page = PageController::new(backend, TerminalView::new());

    let ok = match cli.command {
        Command::Upload { paths } => commands::upload(&mut page, &paths).await,
        Command::Ask { words } => commands::ask(&mut page, &words.join(" ")).await,
        Command::Cleanup => match page.backend().cleanup().await {
            Ok(response) => {
                println!("{}", response.message.unwrap_or_else(|| "Cleaned up".to_string()));
                true
            }
            Err(e) => {
                eprintln!("Cleanup failed: {}", e);
                false
            }
        },
        Command::Session => {
            let input = BufReader::new(tokio::io::stdin());
            commands::session(&mut page, input, tokio::io::stdout()).await?;
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
