use crate::document::{Document, DocumentStatus};
use crate::error::Result;
use crate::tokenizer::{parse_query_word, split_words, QueryWord, StopWords};
use crate::{DocId, RELEVANCE_EPSILON};
use std::collections::BTreeSet;

/// Parsed query: deduplicated required and excluded terms, disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

/// Tokenize and classify a raw query. Stop words are dropped from both sets,
/// including minus words whose stripped term is a stop word.
pub fn parse_query(text: &str, stop_words: &StopWords) -> Result<Query> {
    let mut query = Query::default();
    for word in split_words(text) {
        let parsed = parse_query_word(word)?;
        if stop_words.contains(parsed.term()) { continue; }
        match parsed {
            QueryWord::Plus(t) => { query.plus_words.insert(t.to_string()); }
            QueryWord::Minus(t) => { query.minus_words.insert(t.to_string()); }
        }
    }
    // exclusion wins over inclusion
    let minus = &query.minus_words;
    query.plus_words.retain(|w| !minus.contains(w));
    tracing::trace!(plus = query.plus_words.len(), minus = query.minus_words.len(), "parsed query");
    Ok(query)
}

/// Caller-supplied filter over document metadata, applied before scoring.
pub trait DocumentFilter {
    fn accepts(&self, doc_id: DocId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentFilter for F
where
    F: Fn(DocId, DocumentStatus, i32) -> bool,
{
    fn accepts(&self, doc_id: DocId, status: DocumentStatus, rating: i32) -> bool { self(doc_id, status, rating) }
}

/// Accepts documents with one particular status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFilter(pub DocumentStatus);

impl StatusFilter {
    pub fn actual() -> Self { StatusFilter(DocumentStatus::Actual) }
}

impl From<DocumentStatus> for StatusFilter {
    fn from(status: DocumentStatus) -> Self { StatusFilter(status) }
}

impl DocumentFilter for StatusFilter {
    fn accepts(&self, _doc_id: DocId, status: DocumentStatus, _rating: i32) -> bool { status == self.0 }
}

/// Order by descending relevance; neighbours whose relevance differs by less than
/// [`RELEVANCE_EPSILON`] are ordered by descending rating.
pub fn rank(docs: &mut [Document]) {
    docs.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    // insertion pass: each swap removes one rating inversion, so it terminates
    for i in 1..docs.len() {
        let mut j = i;
        while j > 0 && rating_beats(&docs[j], &docs[j - 1]) {
            docs.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn rating_beats(lower: &Document, upper: &Document) -> bool {
    (upper.relevance - lower.relevance).abs() < RELEVANCE_EPSILON && lower.rating > upper.rating
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(words: &[&str]) -> StopWords { StopWords::try_from_words(words.iter().copied()).unwrap() }

    #[test]
    fn parse_collapses_duplicates_and_drops_stop_words() {
        let q = parse_query("cat cat -dog -in in city", &stop(&["in"])).unwrap();
        assert_eq!(q.plus_words.iter().map(String::as_str).collect::<Vec<_>>(), vec!["cat", "city"]);
        assert_eq!(q.minus_words.iter().map(String::as_str).collect::<Vec<_>>(), vec!["dog"]);
    }

    #[test]
    fn parse_keeps_sets_disjoint() {
        let q = parse_query("cat -cat", &StopWords::new()).unwrap();
        assert!(q.plus_words.is_empty());
        assert!(q.minus_words.contains("cat"));
    }

    #[test]
    fn parse_rejects_bad_minus_words() {
        let none = StopWords::new();
        assert!(parse_query("cat -", &none).is_err());
        assert!(parse_query("cat --dog", &none).is_err());
        assert!(parse_query("cat -do\x05g", &none).is_err());
    }

    #[test]
    fn rank_breaks_ties_by_rating() {
        let mut docs = vec![
            Document::new(1, 0.5, 1),
            Document::new(2, 0.9, 0),
            Document::new(3, 0.5 + 1e-8, 7),
            Document::new(4, 0.1, 9),
        ];
        rank(&mut docs);
        let ids: Vec<_> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 3, 1, 4]);
    }

    #[test]
    fn rank_compares_neighbours_across_a_chain_of_near_ties() {
        let mut docs = vec![
            Document::new(1, 1.0, 0),
            Document::new(2, 1.0 - 0.9e-6, 0),
            Document::new(3, 1.0 - 1.5e-6, 10),
        ];
        rank(&mut docs);
        let ids: Vec<_> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        for pair in docs.windows(2) {
            assert!(pair[1].relevance <= pair[0].relevance + RELEVANCE_EPSILON);
            if (pair[0].relevance - pair[1].relevance).abs() < RELEVANCE_EPSILON {
                assert!(pair[0].rating >= pair[1].rating);
            }
        }
    }

    #[test]
    fn closures_and_status_filters() {
        let even = |id: DocId, _: DocumentStatus, _: i32| id % 2 == 0;
        assert!(even.accepts(2, DocumentStatus::Banned, 0));
        assert!(!even.accepts(3, DocumentStatus::Actual, 0));
        let banned = StatusFilter::from(DocumentStatus::Banned);
        assert!(banned.accepts(3, DocumentStatus::Banned, 0));
        assert!(!StatusFilter::actual().accepts(3, DocumentStatus::Banned, 0));
    }
}
