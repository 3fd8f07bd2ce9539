pub mod analysis;
pub mod books;

use crate::config::{self, ClientConfig};
use crate::error::{ApiErrorBody, ClientError};
use crate::models::analysis::{AnalysisKind, AnalysisOutcome};
use crate::models::book::{Book, SuccessResponse};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Book storage operations on the backend.
#[async_trait]
pub trait BookApi {
    async fn get_book(&self, id: &str) -> Result<Book, ClientError>;
    async fn save_book(&self, book: &Book) -> Result<SuccessResponse, ClientError>;
    async fn get_saved_books(&self) -> Result<Vec<Book>, ClientError>;
}

/// Analysis jobs on the backend.
#[async_trait]
pub trait AnalysisApi {
    async fn analyze(&self, kind: AnalysisKind, book_id: &str)
        -> Result<AnalysisOutcome, ClientError>;
}

/// HTTP client for the backend. Clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Client pointed at the process-wide configured backend.
    pub fn new() -> Self {
        Self::with_config(config::global().clone())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    /// Whether the backend health probe answers with a success status.
    pub async fn health(&self) -> Result<bool, ClientError> {
        debug!("GET {}", self.config.health_url);
        let response = self.client.get(&self.config.health_url).send().await?;
        Ok(response.status().is_success())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns a non-2xx response into the backend's reported detail.
async fn handle_api_error(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await?;
    let error: ApiErrorBody = serde_json::from_str(&text)?;
    Err(ClientError::Backend {
        status,
        detail: error.detail,
    })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = handle_api_error(response).await?;
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}
