use book_client::{AnalysisKind, ApiClient, Book, BookApi, BookStore};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const WAIT_ATTEMPTS_VAR: &str = "BOOK_API_WAIT_ATTEMPTS";
const DEFAULT_WAIT_ATTEMPTS: u32 = 30;
const USAGE: &str =
    "Usage: analysis-console <book_id>... | --saved | --save <book.json>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Analyze(Vec<String>),
    ListSaved,
    Save(String),
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    match args {
        [] => Err("No arguments given".to_string()),
        [flag] if flag == "--saved" => Ok(Command::ListSaved),
        [flag, path] if flag == "--save" => Ok(Command::Save(path.clone())),
        [flag, ..] if flag.starts_with("--") => Err(format!("Unknown option {}", flag)),
        ids => Ok(Command::Analyze(ids.to_vec())),
    }
}

struct Console {
    client: ApiClient,
    store: BookStore,
}

impl Console {
    fn new(client: ApiClient, store: BookStore) -> Self {
        Self { client, store }
    }

    async fn wait_for_backend(&self, attempts: u32) -> Result<(), Box<dyn std::error::Error>> {
        let url = &self.client.config().health_url;
        info!("Waiting for backend at {}...", url);

        for attempt in 1..=attempts {
            match self.client.health().await {
                Ok(true) => {
                    info!("Backend is ready");
                    return Ok(());
                }
                Ok(false) => warn!("Backend health check failed (attempt {}/{})", attempt, attempts),
                Err(e) => warn!("Backend not ready (attempt {}/{}): {}", attempt, attempts, e),
            }
            if attempt < attempts {
                sleep(Duration::from_secs(2)).await;
            }
        }

        Err(format!("Backend at {} did not become ready after {} attempts", url, attempts).into())
    }

    async fn list_saved(&self) -> Result<(), Box<dyn std::error::Error>> {
        let books = self.client.get_saved_books().await?;

        if books.is_empty() {
            info!("No saved books");
            return Ok(());
        }

        info!("{} saved books", books.len());
        for book in &books {
            println!("{}\t{}", book.id, book.title);
        }
        Ok(())
    }

    async fn save_from_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let raw = tokio::fs::read_to_string(path).await?;
        let book: Book = serde_json::from_str(&raw)?;

        info!("Saving book {} from {}", book.id, path);
        let response = self.client.save_book(&book).await?;
        println!("{} ({})", response.message, response.status);
        Ok(())
    }

    async fn process_book(&self, book_id: &str) -> Result<usize, Box<dyn std::error::Error>> {
        info!("📥 Fetching book {}", book_id);
        self.store.set_book_id(book_id);
        let book = self.client.get_book(book_id).await?;
        info!("📖 {} ({} bytes of content)", book.title, book.content.len());
        self.store.set_selected_book(Some(book));

        info!("📊 Running all analyses for book {}", book_id);
        let mut failures = 0;
        for (kind, result) in self.client.analyze_all(book_id).await {
            match result {
                Ok(outcome) => info!("✅ {}: {}", kind, outcome.summary_line()),
                Err(e) => {
                    failures += 1;
                    error!("✗ {}", e);
                }
            }
        }

        Ok(AnalysisKind::ALL.len() - failures)
    }

    async fn run_pipeline(&self, book_ids: &[String]) {
        info!("Starting analysis for {} books", book_ids.len());

        for book_id in book_ids {
            match self.process_book(book_id).await {
                Ok(succeeded) => info!(
                    "✓ Book {} processed, {}/{} analyses succeeded",
                    book_id,
                    succeeded,
                    AnalysisKind::ALL.len()
                ),
                Err(e) => error!("✗ Failed to process book {}: {}", book_id, e),
            }
        }

        self.store.set_selected_book(None);
        info!("Analysis run complete");
    }
}

fn wait_attempts() -> u32 {
    attempts_or_default(std::env::var(WAIT_ATTEMPTS_VAR).ok())
}

fn attempts_or_default(value: Option<String>) -> u32 {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_WAIT_ATTEMPTS)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("analysis_console=info,book_client=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            error!("{}", e);
            info!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let console = Console::new(ApiClient::new(), BookStore::new());
    console.wait_for_backend(wait_attempts()).await?;

    match command {
        Command::ListSaved => console.list_saved().await?,
        Command::Save(path) => console.save_from_file(&path).await?,
        Command::Analyze(book_ids) => console.run_pipeline(&book_ids).await,
    }

    Ok(())
}
