use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    loader::RawCorpus,
    normalize::Normalizer,
};

/// A loaded document: its raw text and its normalized terms.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    raw_text: String,
    tokens: Vec<String>,
    term_counts: HashMap<String, usize>,
}

impl Document {
    /// Build a document from already-normalized tokens.
    pub fn new(name: String, raw_text: String, tokens: Vec<String>) -> Self {
        let mut term_counts = HashMap::new();
        for token in &tokens {
            *term_counts.entry(token.clone()).or_insert(0) += 1;
        }

        Self {
            name,
            raw_text,
            tokens,
            term_counts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of occurrences of `term` in this document's tokens.
    pub fn term_count(&self, term: &str) -> usize {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Distinct terms of this document.
    pub fn distinct_terms(&self) -> impl Iterator<Item = &str> {
        self.term_counts.keys().map(String::as_str)
    }
}

/// Corpus-wide inverse document frequency per term.
///
/// Holds a weight for exactly the terms found in at least one document.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
    document_count: usize,
}

impl IdfTable {
    /// Weight of `term`, or `0.0` for a term no document contains.
    pub fn get(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    /// Number of distinct terms with a weight.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of documents the table was built from.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(t, w)| (t.as_str(), *w))
    }
}

/// `ln(n / df + 1)`.
///
/// The `+ 1` keeps the weight positive for terms present in every document.
pub fn idf_weight(document_count: usize, document_frequency: usize) -> f64 {
    (document_count as f64 / document_frequency as f64 + 1.0).ln()
}

/// Compute the IDF table for `documents`.
///
/// Each document adds one to the count of every distinct term it contains;
/// repeated occurrences within a document do not count again.
pub fn build_idf(documents: &[Document]) -> Result<IdfTable> {
    if documents.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    let document_frequencies = documents.iter().fold(
        HashMap::<&str, usize>::new(),
        |mut acc, doc| {
            for term in doc.distinct_terms() {
                *acc.entry(term).or_insert(0) += 1;
            }
            acc
        },
    );

    let n = documents.len();
    let weights = document_frequencies
        .into_iter()
        .map(|(term, df)| (term.to_string(), idf_weight(n, df)))
        .collect();

    Ok(IdfTable {
        weights,
        document_count: n,
    })
}

/// Every document of the corpus plus the IDF table computed over them.
///
/// Immutable once built; share it across threads freely.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    documents: Vec<Document>,
    idf: IdfTable,
}

impl CorpusIndex {
    /// Normalize every document of `corpus` and compute IDF weights.
    ///
    /// Documents keep the corpus' iteration order (by name).
    pub fn build(corpus: RawCorpus, normalizer: &Normalizer) -> Result<Self> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let documents: Vec<Document> = corpus
            .into_iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(name, raw_text)| {
                let tokens = normalizer.normalize(&raw_text);
                Document::new(name, raw_text, tokens)
            })
            .collect();

        Self::from_documents(documents)
    }

    /// Build an index over documents that are already normalized.
    pub fn from_documents(documents: Vec<Document>) -> Result<Self> {
        let idf = build_idf(&documents)?;
        Ok(Self { documents, idf })
    }

    /// Documents in iteration order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.name == name)
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of distinct terms across the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}
