use std::{path::Path, time::Instant};

use serde::Serialize;

use crate::{
    error::Result,
    index::CorpusIndex,
    loader::{self, RawCorpus},
    normalize::Normalizer,
    rank,
};

/// The answer to one query: the best document and its best sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub query: String,
    pub terms: Vec<String>,
    pub document: String,
    pub document_score: f64,
    pub sentence: String,
    pub sentence_index: usize,
    pub sentence_score: f64,
}

/// One document's score for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentScore {
    pub document: String,
    pub score: f64,
}

/// An answer together with the score of every document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    #[serde(flatten)]
    pub answer: Answer,
    pub documents: Vec<DocumentScore>,
}

/// Corpus statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    pub documents: usize,
    pub vocabulary: usize,
}

/// Answers free-text queries against an immutable corpus index.
///
/// Owns the normalizer the index was built with so queries and sentences go
/// through the same pipeline. Queries only read; the engine can be shared
/// across threads.
pub struct QueryEngine {
    index: CorpusIndex,
    normalizer: Normalizer,
}

impl QueryEngine {
    /// Build an engine over an in-memory corpus.
    pub fn new(corpus: RawCorpus) -> Result<Self> {
        let normalizer = Normalizer::new();
        let start = Instant::now();
        let index = CorpusIndex::build(corpus, &normalizer)?;

        tracing::info!(
            documents = index.len(),
            terms = index.vocabulary_size(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "built corpus index"
        );

        Ok(Self { index, normalizer })
    }

    /// Load every document under `root` and build the engine.
    pub fn load(root: &Path) -> Result<Self> {
        let corpus = loader::load_documents(root)?;
        Self::new(corpus)
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Answer `query`: best document, then best sentence within it.
    pub fn answer(&self, query: &str) -> Result<Answer> {
        let terms = self.normalizer.normalize(query);
        tracing::debug!(?terms, "normalized query");

        let document = rank::rank_document(&terms, &self.index)?;
        let sentence = rank::rank_sentence(
            &terms,
            document.item,
            self.index.idf(),
            &self.normalizer,
        )?;

        Ok(Answer {
            query: query.to_string(),
            document: document.item.name().to_string(),
            document_score: document.score,
            sentence: sentence.item.text.to_string(),
            sentence_index: sentence.position,
            sentence_score: sentence.score,
            terms,
        })
    }

    /// Answer `query` and report how every document scored.
    pub fn explain(&self, query: &str) -> Result<Explanation> {
        let answer = self.answer(query)?;
        let documents = rank::score_documents(&answer.terms, &self.index)
            .into_iter()
            .map(|scored| DocumentScore {
                document: scored.item.name().to_string(),
                score: scored.score,
            })
            .collect();

        Ok(Explanation { answer, documents })
    }

    pub fn status(&self) -> Status {
        Status {
            documents: self.index.len(),
            vocabulary: self.index.vocabulary_size(),
        }
    }
}

/// Human-readable answer: the sentence alone, on one line.
///
/// Line breaks inside a hard-wrapped sentence become single spaces.
pub fn format_human(answer: &Answer) -> String {
    answer.sentence.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Answer as a single JSON line.
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Human-readable explanation: query terms, every document's score with
/// the chosen one marked, then the chosen sentence.
pub fn format_explain(explanation: &Explanation) -> String {
    let answer = &explanation.answer;
    let mut out = String::new();

    if answer.terms.is_empty() {
        out.push_str("terms: (none)\n");
    } else {
        out.push_str(&format!("terms: {}\n", answer.terms.join(" ")));
    }

    for doc in &explanation.documents {
        let marker = if doc.document == answer.document { '*' } else { ' ' };
        out.push_str(&format!(
            "{marker} [{:.3}] {}\n",
            doc.score, doc.document
        ));
    }

    out.push_str(&format!(
        "\n{} #{} [{:.3}]\n{}",
        answer.document,
        answer.sentence_index + 1,
        answer.sentence_score,
        answer.sentence
    ));
    out
}
