pub mod firestore;
pub mod models;
pub mod token;

pub use firestore::{FirestoreClient, RecordStore};
pub use models::{MigrationMarker, SourceRecord};
pub use token::{ServiceAccountKey, TokenProvider};

use thiserror::Error;

/// Fehler der Storage-Schicht
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Credentials error: {0}")]
    Credentials(String),
    #[error("Token exchange failed: {0}")]
    Token(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Firestore API Error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Missing or invalid field: {0}")]
    Malformed(String),
}
