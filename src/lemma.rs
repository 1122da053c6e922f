use std::collections::HashMap;

/// Coarse part of speech used to pick lemmatization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

// -- Irregular forms --
//
// Each table maps an inflected form to its dictionary form. Lookup order is
// verb, noun, adjective, adverb; the first table holding a word decides its
// tag.

const VERB_FORMS: &[(&str, &str)] = &[
    ("ran", "run"), ("went", "go"), ("gone", "go"), ("going", "go"),
    ("sat", "sit"), ("saw", "see"), ("seen", "see"), ("came", "come"),
    ("took", "take"), ("taken", "take"), ("gave", "give"), ("given", "give"),
    ("got", "get"), ("gotten", "get"), ("made", "make"), ("said", "say"),
    ("paid", "pay"), ("laid", "lay"), ("knew", "know"), ("known", "know"),
    ("grew", "grow"), ("grown", "grow"), ("threw", "throw"),
    ("thrown", "throw"), ("blew", "blow"), ("blown", "blow"),
    ("flew", "fly"), ("flown", "fly"), ("drew", "draw"), ("drawn", "draw"),
    ("shown", "show"), ("wrote", "write"), ("written", "write"),
    ("rode", "ride"), ("ridden", "ride"), ("drove", "drive"),
    ("driven", "drive"), ("rose", "rise"), ("risen", "rise"),
    ("ate", "eat"), ("eaten", "eat"), ("fell", "fall"), ("fallen", "fall"),
    ("forgot", "forget"), ("forgotten", "forget"), ("began", "begin"),
    ("begun", "begin"), ("sang", "sing"), ("sung", "sing"),
    ("rang", "ring"), ("rung", "ring"), ("swam", "swim"), ("swum", "swim"),
    ("drank", "drink"), ("drunk", "drink"), ("sank", "sink"),
    ("sunk", "sink"), ("became", "become"), ("stood", "stand"),
    ("understood", "understand"), ("bought", "buy"), ("brought", "bring"),
    ("thought", "think"), ("taught", "teach"), ("caught", "catch"),
    ("sought", "seek"), ("fought", "fight"), ("found", "find"),
    ("felt", "feel"), ("left", "leave"), ("lost", "lose"), ("meant", "mean"),
    ("kept", "keep"), ("slept", "sleep"), ("swept", "sweep"),
    ("wept", "weep"), ("met", "meet"), ("fed", "feed"), ("bred", "breed"),
    ("led", "lead"), ("fled", "flee"), ("sped", "speed"), ("heard", "hear"),
    ("held", "hold"), ("told", "tell"), ("sold", "sell"), ("sent", "send"),
    ("spent", "spend"), ("lent", "lend"), ("bent", "bend"),
    ("built", "build"), ("won", "win"), ("shot", "shoot"), ("hung", "hang"),
    ("struck", "strike"), ("stuck", "stick"), ("dug", "dig"),
    ("lit", "light"), ("slid", "slide"), ("shook", "shake"),
    ("shaken", "shake"), ("woke", "wake"), ("woken", "wake"),
    ("broke", "break"), ("broken", "break"), ("spoke", "speak"),
    ("spoken", "speak"), ("chose", "choose"), ("chosen", "choose"),
    ("froze", "freeze"), ("frozen", "freeze"), ("stole", "steal"),
    ("stolen", "steal"), ("wore", "wear"), ("worn", "wear"),
    ("tore", "tear"), ("torn", "tear"), ("swore", "swear"),
    ("sworn", "swear"), ("bit", "bite"), ("bitten", "bite"),
    ("hid", "hide"), ("hidden", "hide"), ("forgave", "forgive"),
    ("forgiven", "forgive"), ("mistook", "mistake"),
    ("mistaken", "mistake"), ("lain", "lie"), ("lying", "lie"),
    ("dying", "die"), ("tying", "tie"), ("died", "die"), ("lied", "lie"),
    ("tied", "tie"), ("used", "use"), ("using", "use"), ("agreed", "agree"),
    ("freed", "free"), ("added", "add"), ("adding", "add"),
];

const NOUN_FORMS: &[(&str, &str)] = &[
    ("geese", "goose"), ("mice", "mouse"), ("lice", "louse"),
    ("teeth", "tooth"), ("feet", "foot"), ("men", "man"),
    ("women", "woman"), ("children", "child"), ("oxen", "ox"),
    ("wolves", "wolf"), ("knives", "knife"), ("leaves", "leaf"),
    ("lives", "life"), ("wives", "wife"), ("halves", "half"),
    ("selves", "self"), ("shelves", "shelf"), ("thieves", "thief"),
    ("loaves", "loaf"), ("calves", "calf"), ("analyses", "analysis"),
    ("crises", "crisis"), ("theses", "thesis"), ("criteria", "criterion"),
    ("phenomena", "phenomenon"), ("data", "datum"), ("cacti", "cactus"),
    ("fungi", "fungus"), ("radii", "radius"),
    // Words that only look inflected.
    ("news", "news"), ("series", "series"), ("species", "species"),
    ("hundred", "hundred"), ("sacred", "sacred"), ("naked", "naked"),
    ("wicked", "wicked"), ("morning", "morning"), ("evening", "evening"),
    ("nothing", "nothing"), ("something", "something"),
    ("anything", "anything"), ("everything", "everything"),
    ("ceiling", "ceiling"), ("sibling", "sibling"),
];

const ADJECTIVE_FORMS: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"),
    ("worst", "bad"), ("bigger", "big"), ("biggest", "big"),
    ("larger", "large"), ("largest", "large"), ("smaller", "small"),
    ("smallest", "small"), ("older", "old"), ("oldest", "old"),
    ("elder", "old"), ("younger", "young"), ("youngest", "young"),
    ("later", "late"), ("latest", "late"), ("earlier", "early"),
    ("earliest", "early"), ("happier", "happy"), ("easier", "easy"),
    ("higher", "high"), ("highest", "high"), ("lower", "low"),
    ("lowest", "low"), ("longer", "long"), ("longest", "long"),
    ("stronger", "strong"), ("strongest", "strong"), ("greater", "great"),
    ("greatest", "great"), ("hotter", "hot"), ("hottest", "hot"),
    ("colder", "cold"), ("coldest", "cold"), ("darker", "dark"),
    ("darkest", "dark"),
];

const ADVERB_FORMS: &[(&str, &str)] =
    &[("farther", "far"), ("farthest", "far")];

/// Tags words and reduces them to their dictionary form.
///
/// Tagging looks at one word at a time: the irregular-form tables first,
/// then the inflectional suffix. Untagged words are lemmatized as nouns.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    irregular: HashMap<&'static str, (PartOfSpeech, &'static str)>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        let tables = [
            (PartOfSpeech::Verb, VERB_FORMS),
            (PartOfSpeech::Noun, NOUN_FORMS),
            (PartOfSpeech::Adjective, ADJECTIVE_FORMS),
            (PartOfSpeech::Adverb, ADVERB_FORMS),
        ];

        let mut irregular = HashMap::new();
        for (pos, forms) in tables {
            for &(form, lemma) in forms {
                irregular.entry(form).or_insert((pos, lemma));
            }
        }

        Self { irregular }
    }

    /// Part of speech of a lowercased `word`, if one can be told.
    pub fn tag(&self, word: &str) -> Option<PartOfSpeech> {
        if let Some((pos, _)) = self.irregular.get(word) {
            return Some(*pos);
        }
        if !is_plain_word(word) {
            return None;
        }

        if word.len() > 4 && word.ends_with("ly") {
            Some(PartOfSpeech::Adverb)
        } else if word.ends_with("ing") || word.ends_with("ed") {
            Some(PartOfSpeech::Verb)
        } else if word.ends_with('s') {
            Some(PartOfSpeech::Noun)
        } else {
            None
        }
    }

    /// Dictionary form of a lowercased `word`.
    ///
    /// A reduction is only taken when its result is its own lemma, so
    /// `lemmatize(lemmatize(w)) == lemmatize(w)` for every word.
    pub fn lemmatize(&self, word: &str) -> String {
        let candidate = self.reduce(word);
        if candidate != word && self.reduce(&candidate) != candidate {
            return word.to_string();
        }
        candidate
    }

    fn reduce(&self, word: &str) -> String {
        if let Some((_, lemma)) = self.irregular.get(word) {
            return (*lemma).to_string();
        }
        if !is_plain_word(word) {
            return word.to_string();
        }

        match self.tag(word) {
            Some(PartOfSpeech::Verb) => reduce_verb(word),
            Some(PartOfSpeech::Adjective | PartOfSpeech::Adverb) => {
                word.to_string()
            }
            Some(PartOfSpeech::Noun) | None => reduce_noun(word),
        }
    }
}

// Rules only apply to ASCII lowercase words.
fn is_plain_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

fn has_vowel(stem: &str) -> bool {
    stem.bytes().any(is_vowel)
}

fn reduce_noun(word: &str) -> String {
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if word.len() > 4
        && let Some(stem) = word.strip_suffix("ies")
    {
        return format!("{stem}y");
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.len() > 3
        && let Some(stem) = word.strip_suffix('s')
    {
        return stem.to_string();
    }
    word.to_string()
}

fn reduce_verb(word: &str) -> String {
    if word.ends_with("eed") {
        return word.to_string();
    }
    if word.len() > 4
        && let Some(stem) = word.strip_suffix("ied")
    {
        return format!("{stem}y");
    }

    let stem = word
        .strip_suffix("ing")
        .or_else(|| word.strip_suffix("ed"));
    match stem {
        Some(stem) if stem.len() >= 3 && has_vowel(stem) => restore_stem(stem),
        _ => word.to_string(),
    }
}

/// Undo the spelling changes English makes before `-ed` and `-ing`.
fn restore_stem(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    let last = bytes[n - 1];
    let prev = bytes[n - 2];

    // running -> run, stopped -> stop
    if last == prev
        && matches!(last, b'b' | b'd' | b'g' | b'm' | b'n' | b'p' | b'r' | b't')
    {
        return stem[..n - 1].to_string();
    }

    let needs_e = is_short_syllable(bytes)
        || matches!(last, b'c' | b'v' | b'z')
        || (last == b'g' && matches!(prev, b'd' | b'r'))
        || (last == b's' && matches!(prev, b'l' | b'n' | b'p' | b'r'))
        || (last == b't' && prev == b'a' && n >= 3 && !is_vowel(bytes[n - 3]));

    if needs_e && last != b'e' {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

// One vowel group, a single vowel, ending in a consonant other than w, x or
// y: `hop`, `mak`, `writ`.
fn is_short_syllable(bytes: &[u8]) -> bool {
    let n = bytes.len();
    if n < 3 {
        return false;
    }
    let last = bytes[n - 1];
    if is_vowel(last) || matches!(last, b'w' | b'x') {
        return false;
    }
    if !is_vowel(bytes[n - 2]) || is_vowel(bytes[n - 3]) {
        return false;
    }
    bytes[..n - 2].iter().all(|&b| !is_vowel(b))
}
