//! State container for the Books component.
//!
//! Owns the fetched snapshot, the draft form, the editing target, and the
//! error banner, and exposes one transition function per user action. All
//! operations go through `&mut self`, so at most one is in flight per
//! instance and a stale fetch can never overwrite a newer snapshot.

use libris_api::{Book, BookDraft, BooksApi};
use thiserror::Error;

use crate::utils;

/// Message shown when the user is asked to confirm a delete.
pub const DELETE_CONFIRM_MESSAGE: &str =
    "Are you sure? This will delete the book and all the data related to it";

/// User-visible failure banner.
///
/// Every operation collapses its failure into one of these flat messages;
/// a new failure replaces any previous one and success never clears it.
/// The underlying cause goes to the log stream instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("Failed to fetch books")]
    Fetch,
    #[error("Failed to save book")]
    Save,
    #[error("Failed to delete book")]
    Delete,
}

/// Draft form fields addressable by a user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    PublishDate,
}

/// Interactive confirmation before destructive actions.
pub trait ConfirmPrompt {
    /// Present `message` and return whether the user accepted.
    fn confirm(&mut self, message: &str) -> bool;
}

/// The Books component state and its transition functions.
pub struct BooksManager<A> {
    api: A,
    books: Vec<Book>,
    draft: BookDraft,
    edit_target: Option<String>,
    banner: Option<SyncError>,
}

impl<A: BooksApi> BooksManager<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            books: Vec::new(),
            draft: BookDraft::default(),
            edit_target: None,
            banner: None,
        }
    }

    /// Last successfully fetched snapshot.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Current draft field values.
    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    /// Identifier of the record being edited; `None` means submit creates.
    pub fn edit_target(&self) -> Option<&str> {
        self.edit_target.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Current failure banner, if any.
    pub fn banner(&self) -> Option<SyncError> {
        self.banner
    }

    /// Update a single draft field.
    ///
    /// No validation happens here; required fields are the front-end's
    /// concern, as they were the input widgets' in the source UI.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.draft.title = value,
            Field::Author => self.draft.author = value,
            Field::PublishDate => self.draft.publish_date = value,
        }
    }

    /// Pre-populate the draft from an existing record and mark it as the
    /// editing target.
    ///
    /// The stored date is truncated to its calendar-date portion, the
    /// format the form works in. No network traffic.
    pub fn begin_edit(&mut self, book: &Book) {
        self.draft = BookDraft {
            title: book.title.clone(),
            author: book.author.clone(),
            publish_date: book
                .publish_date
                .as_deref()
                .map(utils::date_only)
                .unwrap_or_default()
                .to_string(),
        };
        self.edit_target = Some(book.id.clone());
    }

    /// Reload the snapshot from the backend.
    ///
    /// On success the snapshot is replaced wholesale, never merged. On
    /// failure the fetch banner is raised and the previous snapshot stays
    /// on display.
    pub async fn refresh(&mut self) {
        match self.api.list().await {
            Ok(books) => {
                tracing::debug!(target: "libris::books", count = books.len(), "snapshot replaced");
                self.books = books;
            }
            Err(err) => {
                tracing::warn!(target: "libris::books", error = %err, "fetch failed");
                self.banner = Some(SyncError::Fetch);
            }
        }
    }

    /// Submit the draft: update when an editing target is set, create
    /// otherwise.
    ///
    /// On success the draft and target are cleared unconditionally and the
    /// list is reloaded. On failure the save banner is raised and draft
    /// and target stay as they were; nothing was applied locally, so there
    /// is nothing to roll back.
    pub async fn submit(&mut self) {
        let result = match &self.edit_target {
            Some(id) => self.api.update(id, &self.draft).await,
            None => self.api.create(&self.draft).await,
        };

        match result {
            Ok(saved) => {
                tracing::debug!(target: "libris::books", id = %saved.id, "record saved");
                self.draft = BookDraft::default();
                self.edit_target = None;
                self.refresh().await;
            }
            Err(err) => {
                tracing::warn!(target: "libris::books", error = %err, "save failed");
                self.banner = Some(SyncError::Save);
            }
        }
    }

    /// Delete a record after interactive confirmation.
    ///
    /// A declined prompt issues no request and changes nothing. A
    /// confirmed delete issues exactly one request and then reloads the
    /// list; when the delete itself fails the delete banner is raised and
    /// the reload is skipped.
    pub async fn delete(&mut self, id: &str, prompt: &mut dyn ConfirmPrompt) {
        if !prompt.confirm(DELETE_CONFIRM_MESSAGE) {
            tracing::debug!(target: "libris::books", %id, "delete declined");
            return;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                tracing::debug!(target: "libris::books", %id, "record deleted");
                self.refresh().await;
            }
            Err(err) => {
                tracing::warn!(target: "libris::books", error = %err, "delete failed");
                self.banner = Some(SyncError::Delete);
            }
        }
    }
}
