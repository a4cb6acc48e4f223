// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The TF-IDF model: term counting, document frequencies, and weights.
//!
//! Built once per scoring call over the full corpus (query document first,
//! then every candidate in input order) and immutable afterwards. Document
//! order matters: the scorer relies on index 0 being the query so it never
//! scores the query against itself.
//!
//! # Formula
//!
//! ```text
//! tf(t, d)     = raw count of t in d's token sequence
//! idf(t)       = ln((1 + N) / (1 + df(t)))
//! weight(t, d) = tf(t, d) × idf(t)
//! ```
//!
//! The smoothed IDF is monotonically decreasing in document frequency: a
//! term present in every document gets idf = ln(1) = 0, and a term present
//! in no document weighs 0 through tf. Weights are therefore always ≥ 0.

use std::collections::HashMap;

use crate::tokenize::tokenize;

/// An immutable TF-IDF model over an ordered document sequence.
#[derive(Debug, Clone, Default)]
pub struct TfIdf {
    /// Per-document term counts, in the order documents were added.
    documents: Vec<HashMap<String, usize>>,
    /// Number of documents containing each term at least once.
    document_frequency: HashMap<String, usize>,
}

impl TfIdf {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model over an ordered corpus in one shot.
    pub fn build<'a, I>(corpus: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut model = Self::new();
        for text in corpus {
            model.add_document(text);
        }
        model
    }

    /// Tokenize `text` and append it as the next document.
    ///
    /// Document indices are assigned in call order, starting at 0.
    pub fn add_document(&mut self, text: &str) {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokenize(text) {
            *counts.entry(token).or_insert(0) += 1;
        }
        for term in counts.keys() {
            *self.document_frequency.entry(term.clone()).or_insert(0) += 1;
        }
        self.documents.push(counts);
    }

    /// Number of documents in the corpus.
    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Raw count of `term` in document `doc_index`'s token sequence.
    ///
    /// Out-of-range indices count as 0 rather than panicking — callers
    /// iterate candidate positions they supplied themselves.
    pub fn term_frequency(&self, term: &str, doc_index: usize) -> usize {
        self.documents
            .get(doc_index)
            .and_then(|doc| doc.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// Number of corpus documents containing `term` at least once.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    /// Smoothed inverse document frequency: `ln((1 + N) / (1 + df))`.
    pub fn idf(&self, term: &str) -> f64 {
        let n = self.documents.len() as f64;
        let df = self.document_frequency(term) as f64;
        ((1.0 + n) / (1.0 + df)).ln()
    }

    /// TF-IDF weight of `term` within document `doc_index`.
    ///
    /// Always ≥ 0: tf is a count and idf is non-negative for df ≤ N.
    pub fn weight(&self, term: &str, doc_index: usize) -> f64 {
        let tf = self.term_frequency(term, doc_index);
        if tf == 0 {
            return 0.0;
        }
        tf as f64 * self.idf(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> TfIdf {
        TfIdf::build([
            "heart failure readmission",
            "heart failure protocols heart",
            "oncology trials",
        ])
    }

    #[test]
    fn term_frequency_counts_raw_occurrences() {
        let m = model();
        assert_eq!(m.term_frequency("heart", 0), 1);
        assert_eq!(m.term_frequency("heart", 1), 2);
        assert_eq!(m.term_frequency("heart", 2), 0);
        assert_eq!(m.term_frequency("absent", 0), 0);
    }

    #[test]
    fn document_frequency_counts_documents_not_occurrences() {
        let m = model();
        // "heart" appears three times total but in two documents.
        assert_eq!(m.document_frequency("heart"), 2);
        assert_eq!(m.document_frequency("oncology"), 1);
        assert_eq!(m.document_frequency("absent"), 0);
    }

    #[test]
    fn idf_decreases_with_document_frequency() {
        let m = model();
        let rare = m.idf("oncology"); // df = 1
        let common = m.idf("heart"); // df = 2
        assert!(rare > common);
    }

    #[test]
    fn term_in_every_document_weighs_zero() {
        let m = TfIdf::build(["shared term", "shared word", "shared text"]);
        // df = N, so idf = ln((1+N)/(1+N)) = 0.
        assert_eq!(m.idf("shared"), 0.0);
        assert_eq!(m.weight("shared", 0), 0.0);
    }

    #[test]
    fn absent_term_weighs_zero() {
        let m = model();
        assert_eq!(m.weight("absent", 0), 0.0);
        assert_eq!(m.weight("heart", 99), 0.0);
    }

    #[test]
    fn weights_are_non_negative() {
        let m = model();
        for doc in 0..m.len() {
            for term in ["heart", "failure", "oncology", "trials", "absent"] {
                assert!(m.weight(term, doc) >= 0.0);
            }
        }
    }

    #[test]
    fn out_of_range_document_is_not_a_panic() {
        let m = TfIdf::new();
        assert!(m.is_empty());
        assert_eq!(m.term_frequency("x", 0), 0);
        assert_eq!(m.weight("x", 0), 0.0);
    }
}
