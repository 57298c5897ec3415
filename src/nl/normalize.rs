//! Text normalization for the instruction compiler.
//!
//! Pipeline: raw input → case fold → diacritic fold → hyphen/slash
//! replacement → whitespace collapse. The output feeds the step segmenter,
//! which still needs to see commas and semicolons, so sentence punctuation
//! is left in place here and stripped at tokenization time.
//!
//! All operations are pure string transforms — no external dependencies.

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Normalize a raw instruction string.
///
/// Lowercases, folds Spanish diacritics onto their base Latin letters,
/// replaces hyphens and slashes with spaces, and collapses whitespace runs
/// to a single space. Empty input yields an empty string.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars().flat_map(char::to_lowercase) {
        match fold_diacritic(c) {
            '-' | '/' => out.push(' '),
            c if c.is_whitespace() => out.push(' '),
            c => out.push(c),
        }
    }

    // Collapse whitespace runs and trim
    let mut collapsed = String::with_capacity(out.len());
    let mut last_space = true;
    for c in out.chars() {
        if c == ' ' {
            if !last_space {
                collapsed.push(' ');
            }
            last_space = true;
        } else {
            collapsed.push(c);
            last_space = false;
        }
    }
    while collapsed.ends_with(' ') {
        collapsed.pop();
    }
    collapsed
}

/// Split a normalized fragment into word tokens, stripping any remaining
/// punctuation. Tokens are the unit the classifier and recognizer work on.
pub fn tokenize(fragment: &str) -> Vec<String> {
    fragment
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Diacritic folding
// ---------------------------------------------------------------------------

/// Map an accented Latin letter to its base form. Covers the Spanish set
/// plus the common French/Portuguese vowels that show up in mixed input.
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
