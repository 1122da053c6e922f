use std::collections::HashSet;

use tantivy::tokenizer::{
    SimpleTokenizer,
    StopWordFilter,
    TextAnalyzer,
    TokenStream,
};

use crate::lemma::Lemmatizer;

/// English stopwords. Contracted forms appear without their apostrophe
/// since punctuation is stripped before tokenizing.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "her", "hers", "herself", "it", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing",
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between",
    "into", "through", "during", "before", "after", "above", "below", "to",
    "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "s", "t", "can", "will", "just", "don", "should", "now", "d",
    "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn",
    "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

/// Turns free text into normalized terms.
///
/// Documents, sentences and queries must all go through the same
/// `Normalizer` or their scores stop being comparable. Build one and share
/// it; it is `Send + Sync`.
pub struct Normalizer {
    analyzer: TextAnalyzer,
    lemmatizer: Lemmatizer,
    stop_words: HashSet<&'static str>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        let analyzer = TextAnalyzer::builder(SimpleTokenizer::default())
            .filter(StopWordFilter::remove(
                ENGLISH_STOP_WORDS.iter().map(|w| (*w).to_string()),
            ))
            .build();

        Self {
            analyzer,
            lemmatizer: Lemmatizer::new(),
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Normalize `text` into an ordered term sequence.
    ///
    /// ASCII punctuation is removed first, so `don't` becomes `dont` rather
    /// than two tokens. The text is lowercased as a whole before it is split
    /// on non-alphanumeric characters, so a lowercase mapping that yields a
    /// combining mark (`İ` to `i\u{307}`) splits on the first pass and not
    /// the second. Stopwords are dropped, each word is reduced to its lemma
    /// and lemmas that are themselves stopwords are dropped. Duplicates are
    /// kept.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let stripped: String = text
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect::<String>()
            .to_lowercase();

        let mut analyzer = self.analyzer.clone();
        let mut stream = analyzer.token_stream(&stripped);
        let mut terms = Vec::new();

        while stream.advance() {
            let lemma = self.lemmatizer.lemmatize(&stream.token().text);
            if !self.stop_words.contains(lemma.as_str()) {
                terms.push(lemma);
            }
        }

        terms
    }

    /// Whether `word` is in the stopword set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}
