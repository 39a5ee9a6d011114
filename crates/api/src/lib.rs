//! REST collaborator for the Books collection.
//!
//! The component talks to the backend exclusively through [`BooksApi`];
//! [`HttpBooksApi`] is the production implementation. Keeping the seam a
//! trait lets tests substitute an in-memory backend without touching the
//! component.

use async_trait::async_trait;

pub mod error;
pub mod http;
pub mod models;

pub use error::ApiError;
pub use http::HttpBooksApi;
pub use models::{Book, BookDraft};
pub use reqwest::StatusCode;

/// The four REST operations the Books backend exposes.
///
/// `GET /books`, `POST /books`, `PUT /books/{id}`, `DELETE /books/{id}`.
/// Implementations own transport concerns; the refresh-after-mutation
/// policy belongs to the caller.
#[async_trait]
pub trait BooksApi: Send + Sync {
    /// Fetch the full collection.
    async fn list(&self) -> Result<Vec<Book>, ApiError>;

    /// Create a record from the draft payload; returns the stored record.
    async fn create(&self, draft: &BookDraft) -> Result<Book, ApiError>;

    /// Replace the record identified by `id` with the draft payload.
    async fn update(&self, id: &str, draft: &BookDraft) -> Result<Book, ApiError>;

    /// Remove the record identified by `id`.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}
