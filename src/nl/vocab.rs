//! Vocabulary loader — lexical data for the instruction compiler.
//!
//! Single consolidated loader for everything that steers classification and
//! entity recognition: the verb lexicon (surface form → action category),
//! the object/location/target gazetteers, the stopword filter, and the
//! culinary-verb list used by the infinitive heuristic.
//!
//! Uses the standard disk-first + `include_str!` fallback pattern.

use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::nl::classify::ActionCategory;

// ---------------------------------------------------------------------------
// Embedded fallback
// ---------------------------------------------------------------------------

const EMBEDDED_VOCAB: &str = include_str!("../../data/vocab.yaml");

// ---------------------------------------------------------------------------
// YAML schema types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct VocabYaml {
    lexicon: Vec<LexiconEntryYaml>,
    objects: Vec<String>,
    locations: Vec<String>,
    targets: Vec<String>,
    stopwords: Vec<String>,
    culinary_verbs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LexiconEntryYaml {
    phrase: Vec<String>,
    category: String,
}

// ---------------------------------------------------------------------------
// Runtime vocabulary — the loaded, indexed form
// ---------------------------------------------------------------------------

/// Loaded vocabulary, indexed for fast lookup.
///
/// Gazetteers stay as `Vec` on purpose: iteration order is the match
/// priority for entity recognition.
#[derive(Debug)]
pub struct Vocab {
    /// Verb lexicon: (phrase tokens, category). Multi-word entries are
    /// scanned against two-token spans before single tokens are tried.
    pub lexicon: Vec<(Vec<String>, ActionCategory)>,
    /// Known object names, in priority order.
    pub objects: Vec<String>,
    /// Known place names, in priority order.
    pub locations: Vec<String>,
    /// Known target names (for neutralize-class steps), in priority order.
    pub targets: Vec<String>,
    /// Function words filtered before gazetteer matching.
    pub stopwords: HashSet<String>,
    /// Closed set of cooking infinitives for the verb-ending heuristic.
    pub culinary_verbs: HashSet<String>,
}

impl Vocab {
    /// Look up a single-token lexicon entry.
    pub fn category_of(&self, token: &str) -> Option<ActionCategory> {
        self.lexicon
            .iter()
            .find(|(phrase, _)| phrase.len() == 1 && phrase[0] == token)
            .map(|(_, cat)| *cat)
    }

    /// Look up a two-token lexicon entry.
    pub fn category_of_pair(&self, a: &str, b: &str) -> Option<ActionCategory> {
        self.lexicon
            .iter()
            .find(|(phrase, _)| phrase.len() == 2 && phrase[0] == a && phrase[1] == b)
            .map(|(_, cat)| *cat)
    }
}

// ---------------------------------------------------------------------------
// Singleton
// ---------------------------------------------------------------------------

static VOCAB: OnceLock<Vocab> = OnceLock::new();

/// Get the loaded vocabulary (singleton, loaded on first call).
pub fn vocab() -> &'static Vocab {
    VOCAB.get_or_init(load_vocab)
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

fn load_vocab() -> Vocab {
    // Disk-first, embedded fallback
    let yaml_str = std::fs::read_to_string("data/vocab.yaml")
        .ok()
        .unwrap_or_else(|| EMBEDDED_VOCAB.to_string());

    parse_vocab(&yaml_str).unwrap_or_else(|e| {
        eprintln!("WARN: failed to parse data/vocab.yaml from disk ({}), using embedded", e);
        parse_vocab(EMBEDDED_VOCAB).expect("embedded vocab.yaml must parse")
    })
}

fn parse_vocab(yaml_str: &str) -> Result<Vocab, String> {
    let raw: VocabYaml = serde_yaml::from_str(yaml_str)
        .map_err(|e| format!("YAML parse error: {}", e))?;

    let mut lexicon = Vec::with_capacity(raw.lexicon.len());
    for entry in raw.lexicon {
        let category = ActionCategory::parse(&entry.category)
            .ok_or_else(|| format!("unknown action category '{}'", entry.category))?;
        if entry.phrase.is_empty() || entry.phrase.len() > 2 {
            return Err(format!(
                "lexicon phrase {:?} must have one or two tokens",
                entry.phrase
            ));
        }
        lexicon.push((entry.phrase, category));
    }

    Ok(Vocab {
        lexicon,
        objects: raw.objects,
        locations: raw.locations,
        targets: raw.targets,
        stopwords: raw.stopwords.into_iter().collect(),
        culinary_verbs: raw.culinary_verbs.into_iter().collect(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
