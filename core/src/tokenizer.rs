use crate::error::{Result, SearchError};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref CONTROL: Regex = Regex::new(r"[\x00-\x1F]").expect("valid regex");
}

/// Split text on spaces. Runs of spaces collapse and no empty words are produced.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> + Clone {
    text.split(' ').filter(|w| !w.is_empty())
}

/// A word is valid when it holds no ASCII control characters.
pub fn is_valid_word(word: &str) -> bool { !CONTROL.is_match(word) }

/// Words ignored during ingestion and querying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Builds the set from arbitrary strings, rejecting any that fail [`is_valid_word`].
    pub fn try_from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() { continue; }
            if !is_valid_word(word) {
                return Err(SearchError::invalid(format!("stop word {word:?} is invalid")));
            }
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    /// Add the space-separated words of `text`. Nothing is added if any word is invalid.
    pub fn extend_from_text(&mut self, text: &str) -> Result<()> {
        if let Some(bad) = split_words(text).find(|w| !is_valid_word(w)) {
            return Err(SearchError::invalid(format!("stop word {bad:?} is invalid")));
        }
        self.words.extend(split_words(text).map(str::to_string));
        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }
    pub fn len(&self) -> usize { self.words.len() }
    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

/// Validate every word in `text` and drop stop words. Fails on the first invalid word.
pub fn split_into_words_no_stop<'a>(text: &'a str, stop_words: &StopWords) -> Result<Vec<&'a str>> {
    let mut words = Vec::new();
    for word in split_words(text) {
        if !is_valid_word(word) {
            return Err(SearchError::invalid(format!("word {word:?} is invalid")));
        }
        if !stop_words.contains(word) {
            words.push(word);
        }
    }
    Ok(words)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryWord<'a> {
    Plus(&'a str),
    Minus(&'a str),
}

impl<'a> QueryWord<'a> {
    pub fn term(&self) -> &'a str {
        match *self {
            QueryWord::Plus(t) | QueryWord::Minus(t) => t,
        }
    }
}

/// Classify one query token. A leading `-` marks an excluded term; a bare `-`,
/// a double hyphen or an invalid remainder is rejected.
pub fn parse_query_word(word: &str) -> Result<QueryWord<'_>> {
    let (term, minus) = match word.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (word, false),
    };
    if term.is_empty() || term.starts_with('-') || !is_valid_word(term) {
        return Err(SearchError::invalid(format!("query word {word:?} is invalid")));
    }
    Ok(if minus { QueryWord::Minus(term) } else { QueryWord::Plus(term) })
}
