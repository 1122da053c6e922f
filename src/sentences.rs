use unicode_segmentation::UnicodeSegmentation;

/// Lowercased abbreviations (without their final period) after which a
/// period does not end an English sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc",
    "e.g", "i.e", "cf", "al", "inc", "ltd", "co", "corp", "fig",
    "approx", "dept", "est", "gen", "gov", "lt", "col", "sgt", "capt", "rev",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec", "u.s", "u.k",
];

/// Closing marks that may follow a sentence terminator.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201d}', '\u{2019}'];

/// Split `text` into sentences.
///
/// Boundaries come from Unicode sentence segmentation (UAX #29), which also
/// breaks after every line break. A boundary is kept only after a sentence
/// terminator (`.`, `!` or `?`, optionally followed by closing quotes or
/// brackets) that does not end an English abbreviation or a single-letter
/// initial, or after a blank line. Hard-wrapped sentences therefore stay
/// whole. Each sentence is a trimmed slice of `text`, with casing,
/// punctuation and inner line breaks untouched. Blank segments are skipped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;

    for (offset, segment) in text.split_sentence_bound_indices() {
        let begin = *start.get_or_insert(offset);
        let end = offset + segment.len();
        let pending = &text[begin..end];
        let candidate = pending.trim();

        if candidate.is_empty() {
            start = None;
            continue;
        }

        let trailing = &pending[pending.trim_end().len()..];
        let paragraph_break = trailing.matches('\n').count() > 1;
        let sentence_end =
            ends_with_terminator(candidate) && !ends_with_abbreviation(candidate);

        // The last segment always ends at `text.len()`, so nothing is left
        // pending after the loop.
        if !sentence_end && !paragraph_break && end < text.len() {
            continue;
        }

        sentences.push(candidate);
        start = None;
    }

    sentences
}

fn ends_with_terminator(sentence: &str) -> bool {
    sentence
        .trim_end_matches(CLOSERS)
        .ends_with(['.', '!', '?'])
}

fn ends_with_abbreviation(sentence: &str) -> bool {
    let Some(body) = sentence.strip_suffix('.') else {
        return false;
    };
    let last_word = body
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or(body)
        .trim_start_matches(['(', '"', '\'']);

    let mut chars = last_word.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && c.is_uppercase()
        && c != 'I'
    {
        return true;
    }

    let lower = last_word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}
