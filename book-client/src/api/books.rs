use super::{decode_json, ApiClient, BookApi};
use crate::error::ClientError;
use crate::models::book::{Book, SuccessResponse};
use async_trait::async_trait;
use tracing::{debug, error, info};

impl ApiClient {
    async fn fetch_book(&self, id: &str) -> Result<Book, ClientError> {
        let url = self.url(&format!("book/{}", id));
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        decode_json(response).await
    }

    async fn store_book(&self, book: &Book) -> Result<SuccessResponse, ClientError> {
        let url = self.url("book");
        debug!("POST {} (book {})", url, book.id);
        let response = self.client.post(&url).json(book).send().await?;
        decode_json(response).await
    }

    async fn fetch_saved_books(&self) -> Result<Vec<Book>, ClientError> {
        let url = self.url("books");
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        decode_json(response).await
    }
}

#[async_trait]
impl BookApi for ApiClient {
    async fn get_book(&self, id: &str) -> Result<Book, ClientError> {
        self.fetch_book(id).await.map_err(|e| {
            error!("Failed to fetch book {}: {}", id, e);
            ClientError::book("fetch book", e)
        })
    }

    async fn save_book(&self, book: &Book) -> Result<SuccessResponse, ClientError> {
        match self.store_book(book).await {
            Ok(response) => {
                info!("Saved book {}: {}", book.id, response.message);
                Ok(response)
            }
            Err(e) => {
                error!("Failed to save book {}: {}", book.id, e);
                Err(ClientError::book("save book", e))
            }
        }
    }

    async fn get_saved_books(&self) -> Result<Vec<Book>, ClientError> {
        self.fetch_saved_books().await.map_err(|e| {
            error!("Failed to fetch saved books: {}", e);
            ClientError::book("fetch saved books", e)
        })
    }
}
