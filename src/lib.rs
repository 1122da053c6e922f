//! docquery - answer free-text questions from a folder of text files.
//!
//! Every file of a corpus directory becomes a document. Documents are
//! normalized into terms (punctuation stripped, lowercased, stopwords
//! removed, words reduced to their lemma) and each term gets an inverse
//! document frequency weight of `ln(N / df + 1)`. A query picks the document
//! with the highest summed TF-IDF, then the sentence of that document with
//! the highest summed IDF of the query terms it contains.
//!
//! # Quick start
//!
//! ```no_run
//! use docquery::{CorpusDir, QueryEngine};
//!
//! let corpus = CorpusDir::resolve(None).unwrap();
//! let engine = QueryEngine::load(corpus.root()).unwrap();
//!
//! let answer = engine.answer("where did the cat sit?").unwrap();
//! println!("{} ({:.3}): {}", answer.document, answer.document_score, answer.sentence);
//! ```

pub mod corpus_dir;
pub mod error;
pub mod index;
pub mod lemma;
pub mod loader;
pub mod normalize;
pub mod rank;
pub mod search;
pub mod sentences;
pub mod walker;

pub use corpus_dir::CorpusDir;
pub use error::{Error, Result};
pub use index::{CorpusIndex, Document, IdfTable};
pub use normalize::Normalizer;
pub use search::{Answer, QueryEngine};
