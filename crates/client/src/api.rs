//! HTTP transport for the catalog service.
//!
//! [`CatalogApi`] is the seam the store talks through; [`CatalogClient`]
//! implements it against the `/books` endpoints using [`reqwest`].

use async_trait::async_trait;
use bookstore_core::types::DbId;
use bookstore_db::models::book::{Book, CreateBook, UpdateBook};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;

/// Remote operations the store needs from the catalog service.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /books`
    async fn list_books(&self) -> Result<Vec<Book>, ClientError>;

    /// `GET /books/{id}`
    async fn get_book(&self, id: DbId) -> Result<Book, ClientError>;

    /// `POST /books`
    async fn create_book(&self, input: &CreateBook) -> Result<Book, ClientError>;

    /// `PUT /books/{id}`
    async fn update_book(&self, id: DbId, input: &UpdateBook) -> Result<Book, ClientError>;

    /// `DELETE /books/{id}`
    async fn delete_book(&self, id: DbId) -> Result<(), ClientError>;
}

/// Error envelope produced by the catalog service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for a catalog service instance.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the service at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn book_url(&self, id: DbId) -> String {
        format!("{}/books/{id}", self.base_url)
    }

    /// Turn a non-2xx response into [`ClientError::Api`], preferring the
    /// server's `error` message over the raw body.
    async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list_books(&self) -> Result<Vec<Book>, ClientError> {
        let response = self.client.get(self.books_url()).send().await?;
        Self::parse_response(response).await
    }

    async fn get_book(&self, id: DbId) -> Result<Book, ClientError> {
        let response = self.client.get(self.book_url(id)).send().await?;
        Self::parse_response(response).await
    }

    async fn create_book(&self, input: &CreateBook) -> Result<Book, ClientError> {
        let response = self
            .client
            .post(self.books_url())
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update_book(&self, id: DbId, input: &UpdateBook) -> Result<Book, ClientError> {
        let response = self
            .client
            .put(self.book_url(id))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete_book(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.book_url(id)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
