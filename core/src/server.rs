use crate::document::{compute_average_rating, Document, DocumentData, DocumentStatus};
use crate::error::{Result, SearchError};
use crate::index::{InvertedIndex, WordFreqs};
use crate::query::{parse_query, rank, DocumentFilter, StatusFilter};
use crate::tokenizer::{split_into_words_no_stop, StopWords};
use crate::{DocId, MAX_RESULT_DOCUMENT_COUNT};
use std::collections::{BTreeMap, HashMap};

/// In-memory document store plus inverted index, ranked with TF-IDF.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    documents: BTreeMap<DocId, DocumentData>,
    document_ids: Vec<DocId>,
}

impl SearchServer {
    /// Create a server whose stop words are the space-separated words of `stop_words_text`.
    pub fn new(stop_words_text: &str) -> Result<Self> {
        Self::with_stop_words(crate::tokenizer::split_words(stop_words_text))
    }

    pub fn with_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self { stop_words: StopWords::try_from_words(stop_words)?, ..Self::default() })
    }

    /// Add stop words. Meant to be called before ingestion: documents already indexed
    /// keep the term frequencies computed under the previous set.
    pub fn set_stop_words(&mut self, text: &str) -> Result<()> { self.stop_words.extend_from_text(text) }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    /// Ingest one document. Nothing is mutated unless every check passes.
    pub fn add_document(&mut self, doc_id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        if doc_id < 0 {
            return Err(SearchError::invalid(format!("invalid document id {doc_id}: negative")));
        }
        if self.documents.contains_key(&doc_id) {
            return Err(SearchError::invalid(format!("invalid document id {doc_id}: already present")));
        }
        let words = split_into_words_no_stop(text, &self.stop_words)?;
        let rating = compute_average_rating(ratings)?;

        self.index.insert(doc_id, &words);
        self.documents.insert(doc_id, DocumentData { rating, status });
        self.document_ids.push(doc_id);
        tracing::debug!(doc_id, words = words.len(), rating, ?status, "added document");
        Ok(())
    }

    /// Remove a document from the store and every index. Unknown ids are ignored.
    pub fn remove_document(&mut self, doc_id: DocId) {
        if self.documents.remove(&doc_id).is_none() { return; }
        self.index.remove(doc_id);
        self.document_ids.retain(|&id| id != doc_id);
        tracing::debug!(doc_id, "removed document");
    }

    /// Top documents with status [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, StatusFilter::actual())
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, StatusFilter(status))
    }

    /// Rank the documents accepted by `filter`, at most [`MAX_RESULT_DOCUMENT_COUNT`] of them.
    pub fn find_top_documents_with<F: DocumentFilter>(&self, raw_query: &str, filter: F) -> Result<Vec<Document>> {
        let query = parse_query(raw_query, &self.stop_words)?;

        let mut relevance: HashMap<DocId, f64> = HashMap::new();
        for word in &query.plus_words {
            let Some(postings) = self.index.postings(word) else { continue };
            let idf = self.inverse_document_freq(postings.len());
            for (&doc_id, &tf) in postings {
                let data = &self.documents[&doc_id];
                if filter.accepts(doc_id, data.status, data.rating) {
                    *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
                }
            }
        }
        for word in &query.minus_words {
            let Some(postings) = self.index.postings(word) else { continue };
            for doc_id in postings.keys() {
                relevance.remove(doc_id);
            }
        }

        let mut matched: Vec<Document> = relevance
            .into_iter()
            .map(|(doc_id, rel)| Document::new(doc_id, rel, self.documents[&doc_id].rating))
            .collect();
        rank(&mut matched);
        matched.truncate(MAX_RESULT_DOCUMENT_COUNT);
        Ok(matched)
    }

    /// Required terms of `raw_query` found in the document, in term order, with its status.
    /// Any excluded term present in the document empties the list.
    pub fn match_document(&self, raw_query: &str, doc_id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        let status = self.documents.get(&doc_id).ok_or(SearchError::NotFound(doc_id))?.status;
        let query = parse_query(raw_query, &self.stop_words)?;
        if query.minus_words.iter().any(|w| self.index.contains(w, doc_id)) {
            return Ok((Vec::new(), status));
        }
        let matched = query
            .plus_words
            .into_iter()
            .filter(|w| self.index.contains(w, doc_id))
            .collect();
        Ok((matched, status))
    }

    pub fn document_count(&self) -> usize { self.documents.len() }

    /// Id of the document at `index` in insertion order.
    pub fn document_id(&self, index: usize) -> Result<DocId> {
        self.document_ids
            .get(index)
            .copied()
            .ok_or(SearchError::OutOfRange { index, len: self.document_ids.len() })
    }

    /// Term frequencies of one document; empty for an unknown id.
    pub fn word_frequencies(&self, doc_id: DocId) -> &WordFreqs {
        static EMPTY: WordFreqs = BTreeMap::new();
        self.index.word_frequencies(doc_id).unwrap_or(&EMPTY)
    }

    pub fn document(&self, doc_id: DocId) -> Option<&DocumentData> { self.documents.get(&doc_id) }

    pub(crate) fn index(&self) -> &InvertedIndex { &self.index }

    /// Stored ids in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocId> { self.document_ids.iter() }

    fn inverse_document_freq(&self, docs_with_term: usize) -> f64 {
        (self.document_count() as f64 / docs_with_term as f64).ln()
    }
}

impl<'a> IntoIterator for &'a SearchServer {
    type Item = &'a DocId;
    type IntoIter = std::slice::Iter<'a, DocId>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
