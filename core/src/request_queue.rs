use crate::document::{Document, DocumentStatus};
use crate::error::Result;
use crate::query::{DocumentFilter, StatusFilter};
use crate::server::SearchServer;
use crate::MIN_IN_DAY;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueryResult {
    timestamp: u64,
    results: usize,
}

/// Sliding window over the last [`MIN_IN_DAY`] find requests, counting those with no results.
/// Each request advances logical time by one.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<QueryResult>,
    no_result_requests: usize,
    current_time: u64,
}

impl<'a> RequestQueue<'a> {
    pub fn new(server: &'a SearchServer) -> Self {
        Self { server, requests: VecDeque::new(), no_result_requests: 0, current_time: 0 }
    }

    /// Run a search over actual documents and record its result count.
    /// A query rejected with `Err` is not recorded and does not advance logical time.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, StatusFilter::actual())
    }

    pub fn add_find_request_by_status(&mut self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, StatusFilter(status))
    }

    /// Like [`Self::add_find_request`] with a caller filter. Rejected queries are not recorded.
    pub fn add_find_request_with<F: DocumentFilter>(&mut self, raw_query: &str, filter: F) -> Result<Vec<Document>> {
        let docs = self.server.find_top_documents_with(raw_query, filter)?;
        self.record(docs.len());
        Ok(docs)
    }

    pub fn no_result_requests(&self) -> usize { self.no_result_requests }

    fn record(&mut self, results: usize) {
        self.current_time += 1;
        while let Some(front) = self.requests.front() {
            if self.current_time - front.timestamp < MIN_IN_DAY { break; }
            if front.results == 0 {
                self.no_result_requests -= 1;
            }
            self.requests.pop_front();
        }
        self.requests.push_back(QueryResult { timestamp: self.current_time, results });
        if results == 0 {
            self.no_result_requests += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> SearchServer {
        let mut s = SearchServer::new("and in at").unwrap();
        s.add_document(1, "curly cat curly tail", DocumentStatus::Actual, &[7, 2, 7]).unwrap();
        s.add_document(2, "curly dog and fancy collar", DocumentStatus::Actual, &[1, 2, 3]).unwrap();
        s.add_document(3, "big cat fancy collar ", DocumentStatus::Actual, &[1, 2, 8]).unwrap();
        s.add_document(4, "big dog sparrow Eugene", DocumentStatus::Actual, &[1, 3, 2]).unwrap();
        s.add_document(5, "big dog sparrow Vasiliy", DocumentStatus::Actual, &[1, 1, 1]).unwrap();
        s
    }

    #[test]
    fn old_requests_leave_the_window() {
        let s = server();
        let mut queue = RequestQueue::new(&s);
        for _ in 0..(MIN_IN_DAY - 1) {
            queue.add_find_request("empty request").unwrap();
        }
        assert_eq!(queue.no_result_requests(), 1439);
        queue.add_find_request("curly dog").unwrap();
        assert_eq!(queue.no_result_requests(), 1439);
        // window is full: every new request pushes out one empty request
        queue.add_find_request("big collar").unwrap();
        queue.add_find_request("sparrow").unwrap();
        assert_eq!(queue.no_result_requests(), 1437);
    }

    #[test]
    fn counter_never_exceeds_window() {
        let s = server();
        let mut queue = RequestQueue::new(&s);
        for _ in 0..MIN_IN_DAY {
            queue.add_find_request("nothing").unwrap();
        }
        assert_eq!(queue.no_result_requests(), 1440);
        queue.add_find_request("nothing").unwrap();
        assert_eq!(queue.no_result_requests(), 1440);
        for _ in 0..10 {
            queue.add_find_request("sparrow").unwrap();
        }
        assert_eq!(queue.no_result_requests(), 1430);
    }

    #[test]
    fn failed_query_is_not_recorded() {
        let s = server();
        let mut queue = RequestQueue::new(&s);
        assert!(queue.add_find_request("cat --dog").is_err());
        assert_eq!(queue.no_result_requests(), 0);
        let banned = queue.add_find_request_by_status("cat", DocumentStatus::Banned).unwrap();
        assert!(banned.is_empty());
        assert_eq!(queue.no_result_requests(), 1);
    }

    #[test]
    fn failed_query_does_not_advance_time() {
        let s = server();
        let mut queue = RequestQueue::new(&s);
        for _ in 0..MIN_IN_DAY {
            queue.add_find_request("nothing").unwrap();
        }
        for _ in 0..5 {
            assert!(queue.add_find_request("-").is_err());
        }
        // only the oldest request ages out
        queue.add_find_request("sparrow").unwrap();
        assert_eq!(queue.no_result_requests(), 1439);
    }
}
