//! In-memory document index with TF-IDF ranking, minus words, status/rating
//! filters, duplicate removal and a sliding window of empty requests.

pub mod dedup;
pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod request_queue;
pub mod server;
pub mod shared;
pub mod tokenizer;

pub use dedup::{find_duplicates, remove_duplicates};
pub use document::{DocId, Document, DocumentData, DocumentStatus};
pub use error::{Result, SearchError};
pub use index::InvertedIndex;
pub use query::{DocumentFilter, Query, StatusFilter};
pub use request_queue::RequestQueue;
pub use server::SearchServer;
pub use shared::SharedSearchServer;

/// Upper bound on the number of ranked results returned by a search.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
/// Relevance values closer than this are ranked by rating instead.
pub const RELEVANCE_EPSILON: f64 = 1e-6;
/// Width of the request window, in requests.
pub const MIN_IN_DAY: u64 = 1440;
