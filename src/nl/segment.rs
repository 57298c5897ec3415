//! Step segmentation — splits a normalized instruction into ordered steps.
//!
//! Splitting is driven by a fixed, ordered list of separator patterns:
//! literal commas and semicolons first, then connective words and phrases
//! matched as whole words. Multi-word connectives ("y luego", "and then")
//! are listed before their single-word prefixes so the longer form wins.
//!
//! Ordering of the output reflects surface order in the source text; any
//! reordering is a later heuristic, not this stage's job.

// Connective words/phrases, matched against whole words of the already
// lowercased input. Order matters.
const CONNECTIVES: &[&str] = &[
    "y luego",
    "and then",
    "y",
    "luego",
    "despues",
    "then",
    "and",
];

/// Split normalized text into an ordered sequence of non-empty trimmed
/// fragments. Text with no separators yields a single-element sequence;
/// empty text yields an empty sequence.
pub fn segment(normalized: &str) -> Vec<String> {
    if normalized.is_empty() {
        return Vec::new();
    }

    // Pass 1: literal punctuation separators.
    let mut fragments: Vec<String> = normalized
        .split([',', ';'])
        .map(str::to_string)
        .collect();

    // Pass 2: connective words, applied to every fragment in list order.
    for connective in CONNECTIVES {
        let mut next = Vec::with_capacity(fragments.len());
        for frag in &fragments {
            next.extend(split_on_word(frag, connective));
        }
        fragments = next;
    }

    fragments
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect()
}

/// Split a fragment on a connective matched as a whole word/phrase,
/// i.e. bounded by spaces or the fragment ends.
fn split_on_word(fragment: &str, connective: &str) -> Vec<String> {
    let words: Vec<&str> = fragment.split(' ').collect();
    let conn_words: Vec<&str> = connective.split(' ').collect();

    let mut parts = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < words.len() {
        // "solo despues de X" is conditional phrasing, not a step boundary;
        // leave it intact for the condition heuristic.
        let guarded = connective == "despues" && current.last() == Some(&"solo");
        if !guarded
            && i + conn_words.len() <= words.len()
            && words[i..i + conn_words.len()] == conn_words[..]
        {
            parts.push(current.join(" "));
            current = Vec::new();
            i += conn_words.len();
        } else {
            current.push(words[i]);
            i += 1;
        }
    }
    parts.push(current.join(" "));
    parts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
