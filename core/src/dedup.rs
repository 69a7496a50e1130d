use crate::server::SearchServer;
use crate::DocId;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Ids that repeat the term set of a lower id, in ascending order.
/// Term frequencies are ignored; only which terms a document contains matters.
pub fn find_duplicates(server: &SearchServer) -> Vec<DocId> {
    let mut canonical: BTreeMap<Vec<&str>, DocId> = BTreeMap::new();
    let mut duplicates = Vec::new();
    // ascending id order, so the first owner of a signature is the lowest id
    for (doc_id, freqs) in server.index().documents() {
        let signature: Vec<&str> = freqs.keys().map(String::as_str).collect();
        match canonical.entry(signature) {
            Entry::Vacant(slot) => { slot.insert(doc_id); }
            Entry::Occupied(_) => duplicates.push(doc_id),
        }
    }
    duplicates
}

/// Remove every duplicate document, returning the removed ids.
pub fn remove_duplicates(server: &mut SearchServer) -> Vec<DocId> {
    let duplicates = find_duplicates(server);
    for &doc_id in &duplicates {
        server.remove_document(doc_id);
        tracing::info!(doc_id, "found duplicate document id");
    }
    duplicates
}
