//! The Books component: draft form state, the list snapshot, and the
//! synchronizer that keeps the snapshot authoritative.

pub mod manager;
pub mod view;

pub use libris_api::{Book, BookDraft};
pub use manager::{BooksManager, ConfirmPrompt, Field, SyncError, DELETE_CONFIRM_MESSAGE};
