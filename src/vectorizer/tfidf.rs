use super::tokenizer::Tokenizer;
use crate::grouper::GroupError;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Index of a term in the batch vocabulary
pub type TermId = usize;

/// Sparse L2-normalized TF-IDF vector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// (term, weight) pairs sorted by term id, weights > 0
    entries: Vec<(TermId, f64)>,
}

impl TermVector {
    pub fn entries(&self) -> &[(TermId, f64)] {
        &self.entries
    }

    /// Weight of a term, zero when absent
    pub fn weight(&self, term: TermId) -> f64 {
        self.entries
            .binary_search_by_key(&term, |&(t, _)| t)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Terms seen in the current batch and their inverse document frequencies
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, TermId>,
    idf: Vec<f64>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.index.get(term).copied()
    }

    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    pub fn idf(&self, id: TermId) -> Option<f64> {
        self.idf.get(id).copied()
    }
}

/// Output of one vectorization pass
#[derive(Debug, Clone)]
pub struct TfIdf {
    pub vocabulary: Vocabulary,
    pub vectors: Vec<TermVector>,
}

/// Smoothed inverse document frequency: ln((1 + n) / (1 + df)) + 1
pub fn smoothed_idf(n_docs: usize, doc_freq: usize) -> f64 {
    ((1.0 + n_docs as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

/// Build a fresh vocabulary from `documents` and weight every document
/// against it.
///
/// Returns one vector per document, in order. Documents with no surviving
/// tokens get a zero vector; if that holds for every document the batch has
/// no vocabulary and [`GroupError::VocabularyEmpty`] is returned.
pub fn vectorize<S: AsRef<str>>(
    documents: &[S],
    tokenizer: &Tokenizer,
) -> Result<TfIdf, GroupError> {
    let tokenized: Vec<Vec<String>> = documents
        .iter()
        .map(|d| tokenizer.tokenize(d.as_ref()))
        .collect();

    // Document frequency per term; BTreeMap keeps term ids in sorted order.
    let mut df: BTreeMap<&str, usize> = BTreeMap::new();
    for tokens in &tokenized {
        let mut seen: Vec<&str> = tokens.iter().map(String::as_str).collect();
        seen.sort_unstable();
        seen.dedup();
        for term in seen {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    if df.is_empty() {
        return Err(GroupError::VocabularyEmpty);
    }

    let n_docs = documents.len();
    let mut vocabulary = Vocabulary::default();
    for (id, (term, freq)) in df.iter().enumerate() {
        vocabulary.terms.push(term.to_string());
        vocabulary.index.insert(term.to_string(), id);
        vocabulary.idf.push(smoothed_idf(n_docs, *freq));
    }

    debug!(
        documents = n_docs,
        vocabulary = vocabulary.len(),
        "built tf-idf vocabulary"
    );

    let vectors = tokenized
        .iter()
        .map(|tokens| weigh(tokens, &vocabulary))
        .collect();

    Ok(TfIdf { vocabulary, vectors })
}

fn weigh(tokens: &[String], vocabulary: &Vocabulary) -> TermVector {
    let mut counts: BTreeMap<TermId, usize> = BTreeMap::new();
    for token in tokens {
        if let Some(id) = vocabulary.term_id(token) {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<(TermId, f64)> = counts
        .into_iter()
        .map(|(id, count)| (id, count as f64 * vocabulary.idf[id]))
        .collect();

    let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in entries.iter_mut() {
            *w /= norm;
        }
    }

    TermVector { entries }
}
