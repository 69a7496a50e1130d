use crate::dedup::remove_duplicates;
use crate::document::{Document, DocumentStatus};
use crate::error::Result;
use crate::query::DocumentFilter;
use crate::server::SearchServer;
use crate::DocId;
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// Cloneable handle that guards the store and index as one unit.
/// Queries share the lock; ingestion and removal take it exclusively.
#[derive(Clone, Default)]
pub struct SharedSearchServer {
    inner: Arc<RwLock<SearchServer>>,
}

impl SharedSearchServer {
    pub fn new(server: SearchServer) -> Self { Self { inner: Arc::new(RwLock::new(server)) } }

    pub fn add_document(&self, doc_id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        self.inner.write().add_document(doc_id, text, status, ratings)
    }

    pub fn remove_document(&self, doc_id: DocId) { self.inner.write().remove_document(doc_id) }

    pub fn remove_duplicates(&self) -> Vec<DocId> { remove_duplicates(&mut self.inner.write()) }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents(raw_query)
    }

    pub fn find_top_documents_with<F: DocumentFilter>(&self, raw_query: &str, filter: F) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents_with(raw_query, filter)
    }

    pub fn match_document(&self, raw_query: &str, doc_id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        self.inner.read().match_document(raw_query, doc_id)
    }

    pub fn document_count(&self) -> usize { self.inner.read().document_count() }

    /// Shared access for several reads against one consistent state.
    pub fn read(&self) -> RwLockReadGuard<'_, SearchServer> { self.inner.read() }
}
