use crate::DocId;
use std::collections::BTreeMap;

pub type Postings = BTreeMap<DocId, f64>;
pub type WordFreqs = BTreeMap<String, f64>;

/// Term -> document -> normalized term frequency, with the forward map
/// (document -> term -> frequency) kept in step so removal does not scan every term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertedIndex {
    postings: BTreeMap<String, Postings>,
    forward: BTreeMap<DocId, WordFreqs>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index the already validated, stop-word-free words of one document.
    /// Each occurrence adds `1 / words.len()`; an empty word list leaves an empty term set.
    pub fn insert(&mut self, doc_id: DocId, words: &[&str]) {
        let freqs = self.forward.entry(doc_id).or_default();
        if words.is_empty() { return; }
        let inv_word_count = 1.0 / words.len() as f64;
        for &word in words {
            *self.postings.entry(word.to_string()).or_default().entry(doc_id).or_insert(0.0) += inv_word_count;
            *freqs.entry(word.to_string()).or_insert(0.0) += inv_word_count;
        }
    }

    /// Drop a document everywhere, pruning terms left without postings.
    pub fn remove(&mut self, doc_id: DocId) -> bool {
        let Some(freqs) = self.forward.remove(&doc_id) else { return false };
        for term in freqs.keys() {
            if let Some(plist) = self.postings.get_mut(term) {
                plist.remove(&doc_id);
                if plist.is_empty() {
                    self.postings.remove(term);
                }
            }
        }
        true
    }

    pub fn postings(&self, term: &str) -> Option<&Postings> { self.postings.get(term) }

    pub fn contains(&self, term: &str, doc_id: DocId) -> bool {
        self.postings.get(term).map_or(false, |p| p.contains_key(&doc_id))
    }

    pub fn word_frequencies(&self, doc_id: DocId) -> Option<&WordFreqs> { self.forward.get(&doc_id) }

    pub fn documents(&self) -> impl Iterator<Item = (DocId, &WordFreqs)> {
        self.forward.iter().map(|(id, f)| (*id, f))
    }

    pub fn num_terms(&self) -> usize { self.postings.len() }
}
