use std::collections::HashSet;

use serde::Serialize;

use crate::{
    error::{Error, Result},
    index::{CorpusIndex, Document, IdfTable},
    normalize::Normalizer,
    sentences::split_sentences,
};

/// A ranking candidate with its score and its position in iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<T> {
    pub item: T,
    pub score: f64,
    pub position: usize,
}

/// A sentence of a document, borrowed from its raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sentence<'a> {
    pub text: &'a str,
}

/// Pick the highest-scoring candidate.
///
/// Only a strictly greater score replaces the current best, so among tied
/// candidates the first one in iteration order wins. Returns `None` when
/// there are no candidates.
pub fn select_best<T>(
    candidates: impl IntoIterator<Item = (T, f64)>,
) -> Option<Scored<T>> {
    candidates.into_iter().enumerate().fold(
        None,
        |best: Option<Scored<T>>, (position, (item, score))| match best {
            Some(current) if score <= current.score => Some(current),
            _ => Some(Scored {
                item,
                score,
                position,
            }),
        },
    )
}

/// Summed TF-IDF of the query terms in `doc`.
///
/// Each query term adds its IDF times its raw count in the document, once
/// per occurrence in the query. Terms outside the corpus add nothing.
pub fn document_score(query: &[String], doc: &Document, idf: &IdfTable) -> f64 {
    query
        .iter()
        .map(|term| idf.get(term) * doc.term_count(term) as f64)
        .sum()
}

/// Summed IDF of the query terms present in a sentence's term set.
///
/// Presence counts, repetition inside the sentence does not.
pub fn sentence_score(
    query: &[String],
    sentence_terms: &HashSet<String>,
    idf: &IdfTable,
) -> f64 {
    query
        .iter()
        .filter(|term| sentence_terms.contains(term.as_str()))
        .map(|term| idf.get(term))
        .sum()
}

/// Score every document of `index`, in iteration order.
pub fn score_documents<'a>(
    query: &[String],
    index: &'a CorpusIndex,
) -> Vec<Scored<&'a Document>> {
    index
        .documents()
        .iter()
        .enumerate()
        .map(|(position, doc)| Scored {
            item: doc,
            score: document_score(query, doc, index.idf()),
            position,
        })
        .collect()
}

/// The most relevant document for `query`.
///
/// Ties, including an all-zero ranking for an empty or out-of-vocabulary
/// query, go to the first document in index order.
pub fn rank_document<'a>(
    query: &[String],
    index: &'a CorpusIndex,
) -> Result<Scored<&'a Document>> {
    let best = select_best(index.documents().iter().map(|doc| {
        let score = document_score(query, doc, index.idf());
        tracing::trace!(document = doc.name(), score, "scored document");
        (doc, score)
    }))
    .ok_or(Error::EmptyIndex)?;

    tracing::debug!(
        document = best.item.name(),
        score = best.score,
        "selected document"
    );
    Ok(best)
}

/// The most relevant sentence of `doc` for `query`.
///
/// Every sentence is normalized with `normalizer`, which must be the one the
/// index was built with. Ties go to the earliest sentence.
pub fn rank_sentence<'a>(
    query: &[String],
    doc: &'a Document,
    idf: &IdfTable,
    normalizer: &Normalizer,
) -> Result<Scored<Sentence<'a>>> {
    let best = select_best(split_sentences(doc.raw_text()).into_iter().map(
        |text| {
            let terms: HashSet<String> =
                normalizer.normalize(text).into_iter().collect();
            let score = sentence_score(query, &terms, idf);
            tracing::trace!(sentence = text, score, "scored sentence");
            (Sentence { text }, score)
        },
    ))
    .ok_or_else(|| Error::EmptyDocument {
        name: doc.name().to_string(),
    })?;

    tracing::debug!(
        position = best.position,
        score = best.score,
        "selected sentence"
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::loader::RawCorpus;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn doc(name: &str, tokens: &[&str]) -> Document {
        Document::new(name.to_string(), tokens.join(" "), terms(tokens))
    }

    fn index_of(docs: Vec<Document>) -> CorpusIndex {
        CorpusIndex::from_documents(docs).unwrap()
    }

    fn build(pairs: &[(&str, &str)]) -> CorpusIndex {
        let corpus: RawCorpus = pairs
            .iter()
            .map(|(n, t)| (n.to_string(), t.to_string()))
            .collect();
        CorpusIndex::build(corpus, &Normalizer::new()).unwrap()
    }

    #[test]
    fn select_best_takes_strict_maximum() {
        let best = select_best(vec![("a", 1.0), ("b", 3.0), ("c", 2.0)]).unwrap();
        assert_eq!(best.item, "b");
        assert_eq!(best.score, 3.0);
        assert_eq!(best.position, 1);
    }

    #[test]
    fn select_best_keeps_first_of_ties() {
        let best = select_best(vec![("a", 1.0), ("b", 2.0), ("c", 2.0)]).unwrap();
        assert_eq!(best.item, "b");

        let zeros = select_best(vec![("x", 0.0), ("y", 0.0)]).unwrap();
        assert_eq!(zeros.item, "x");
        assert_eq!(zeros.position, 0);
    }

    #[test]
    fn select_best_of_nothing() {
        assert!(select_best(Vec::<(&str, f64)>::new()).is_none());
    }

    #[test]
    fn document_score_multiplies_by_term_count() {
        let index = index_of(vec![
            doc("a", &["cat", "cat", "dog"]),
            doc("b", &["bird"]),
        ]);
        let a = index.document("a").unwrap();
        let idf = index.idf();
        let expected = 2.0 * idf.get("cat");
        assert!((document_score(&terms(&["cat"]), a, idf) - expected).abs() < 1e-12);
    }

    #[test]
    fn repeated_query_term_counts_twice() {
        let index = index_of(vec![doc("a", &["cat"]), doc("b", &["dog"])]);
        let a = index.document("a").unwrap();
        let once = document_score(&terms(&["cat"]), a, index.idf());
        let twice = document_score(&terms(&["cat", "cat"]), a, index.idf());
        assert!((twice - 2.0 * once).abs() < 1e-12);
    }

    #[test]
    fn unknown_terms_score_zero() {
        let index = index_of(vec![doc("a", &["cat"]), doc("b", &["dog"])]);
        for scored in score_documents(&terms(&["unicorn"]), &index) {
            assert_eq!(scored.score, 0.0);
        }
    }

    #[test]
    fn rank_document_picks_highest() {
        let index = index_of(vec![
            doc("a", &["cat"]),
            doc("b", &["dog", "dog"]),
            doc("c", &["dog"]),
        ]);
        let best = rank_document(&terms(&["dog"]), &index).unwrap();
        assert_eq!(best.item.name(), "b");
    }

    #[test]
    fn empty_query_returns_first_document() {
        let index = index_of(vec![doc("a", &["cat"]), doc("b", &["dog"])]);
        let best = rank_document(&[], &index).unwrap();
        assert_eq!(best.item.name(), "a");
        assert_eq!(best.score, 0.0);
    }

    #[test]
    fn out_of_vocabulary_query_returns_first_document() {
        let index = build(&[
            ("b.txt", "Dogs bark loudly at night."),
            ("a.txt", "The cat sat on the mat."),
        ]);
        let query = Normalizer::new().normalize("zebra quantum");
        let best = rank_document(&query, &index).unwrap();
        assert_eq!(best.item.name(), "a.txt");
        assert_eq!(best.score, 0.0);
    }

    #[test]
    fn single_document_always_wins() {
        let index = build(&[("only.txt", "Rust is a systems language.")]);
        let n = Normalizer::new();
        for q in ["rust", "python", "", "systems language", "the"] {
            let best = rank_document(&n.normalize(q), &index).unwrap();
            assert_eq!(best.item.name(), "only.txt");
        }
    }

    #[test]
    fn cat_query_finds_cat_document_and_sentence() {
        let index = build(&[
            ("a.txt", "The cat sat on the mat."),
            ("b.txt", "Dogs bark loudly at night."),
        ]);
        let n = Normalizer::new();
        let query = n.normalize("cat");

        let best_doc = rank_document(&query, &index).unwrap();
        assert_eq!(best_doc.item.name(), "a.txt");

        let best_sentence =
            rank_sentence(&query, best_doc.item, index.idf(), &n).unwrap();
        assert_eq!(best_sentence.item.text, "The cat sat on the mat.");
    }

    #[test]
    fn wrapped_sentence_is_returned_whole() {
        let index = build(&[(
            "a.txt",
            "The quick brown fox jumped\nover the lazy dog near the river.\n\
             Owls hoot.",
        )]);
        let n = Normalizer::new();
        let query = n.normalize("fox river");
        let doc = index.document("a.txt").unwrap();

        let best = rank_sentence(&query, doc, index.idf(), &n).unwrap();
        assert_eq!(
            best.item.text,
            "The quick brown fox jumped\nover the lazy dog near the river."
        );
        assert_eq!(best.position, 0);
    }

    #[test]
    fn long_word_query_matches_its_document() {
        let index = build(&[
            ("a.txt", "Cats sleep."),
            (
                "b.txt",
                "The pneumonoultramicroscopicsilicovolcanoconiosis disease.",
            ),
        ]);
        let n = Normalizer::new();
        let query = n.normalize("pneumonoultramicroscopicsilicovolcanoconiosis");
        assert_eq!(query.len(), 1);

        let best = rank_document(&query, &index).unwrap();
        assert_eq!(best.item.name(), "b.txt");
        assert!(best.score > 0.0);
    }

    #[test]
    fn shared_terms_tie_and_first_document_wins() {
        let index = build(&[
            ("a.txt", "Dogs run. Cats sleep."),
            ("b.txt", "Dogs run fast in parks."),
        ]);
        let n = Normalizer::new();
        let query = n.normalize("dogs run");
        assert_eq!(query, vec!["dog", "run"]);

        let scores = score_documents(&query, &index);
        let a = scores[0].score;
        let b = scores[1].score;
        let expected = 2.0 * 2.0_f64.ln();
        assert!((a - expected).abs() < 1e-12);
        assert!((b - expected).abs() < 1e-12);
        assert!(b >= a);

        let best = rank_document(&query, &index).unwrap();
        assert_eq!(best.item.name(), "a.txt");
    }

    #[test]
    fn ranking_is_deterministic() {
        let index = build(&[
            ("a.txt", "Dogs run. Cats sleep."),
            ("b.txt", "Dogs run fast in parks."),
            ("c.txt", "Cats and dogs share the park."),
        ]);
        let n = Normalizer::new();
        let query = n.normalize("cats park");

        let first = rank_document(&query, &index).unwrap();
        let first_sentence =
            rank_sentence(&query, first.item, index.idf(), &n).unwrap();
        for _ in 0..10 {
            let again = rank_document(&query, &index).unwrap();
            assert_eq!(again.item.name(), first.item.name());
            let sentence =
                rank_sentence(&query, again.item, index.idf(), &n).unwrap();
            assert_eq!(sentence.item, first_sentence.item);
        }
    }

    #[test]
    fn sentence_score_uses_presence_not_frequency() {
        let index = build(&[("pets.txt", "Cat cat cat. Cat dog.")]);
        let n = Normalizer::new();
        let query = n.normalize("cat dog");
        let doc = index.document("pets.txt").unwrap();

        let best = rank_sentence(&query, doc, index.idf(), &n).unwrap();
        assert_eq!(best.item.text, "Cat dog.");
        assert_eq!(best.position, 1);
        assert!((best.score - 2.0 * 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn sentence_ties_go_to_earliest() {
        let index = build(&[("a.txt", "Dogs run. Cats sleep.")]);
        let n = Normalizer::new();
        let doc = index.document("a.txt").unwrap();

        let best =
            rank_sentence(&n.normalize("unicorn"), doc, index.idf(), &n).unwrap();
        assert_eq!(best.item.text, "Dogs run.");
        assert_eq!(best.score, 0.0);

        let best =
            rank_sentence(&n.normalize("cats"), doc, index.idf(), &n).unwrap();
        assert_eq!(best.item.text, "Cats sleep.");
    }

    #[test]
    fn blank_document_has_no_sentence() {
        let n = Normalizer::new();
        let blank = Document::new("blank.txt".into(), " \n ".into(), vec![]);
        let index = index_of(vec![doc("a", &["cat"])]);
        let err = rank_sentence(&[], &blank, index.idf(), &n).unwrap_err();
        assert!(
            matches!(err, Error::EmptyDocument { ref name } if name == "blank.txt")
        );
    }

    proptest! {
        #[test]
        fn document_score_is_additive(
            counts in proptest::collection::vec(0usize..5, 6),
            split in 1usize..6,
        ) {
            let vocabulary = ["alpha", "beta", "gamma", "delta", "eps", "zeta"];
            let mut tokens = Vec::new();
            for (word, count) in vocabulary.iter().zip(&counts) {
                tokens.extend(std::iter::repeat_n(word.to_string(), *count));
            }
            let index = index_of(vec![
                Document::new("a".into(), String::new(), tokens),
                doc("b", &["alpha", "gamma"]),
            ]);
            let a = index.document("a").unwrap();

            let all = terms(&vocabulary);
            let (left, right) = all.split_at(split);
            let whole = document_score(&all, a, index.idf());
            let parts = document_score(left, a, index.idf())
                + document_score(right, a, index.idf());
            prop_assert!((whole - parts).abs() < 1e-9);
        }
    }
}
