//! Heuristic entity recognition.
//!
//! Two independent gazetteer passes per step (objects, locations) plus a
//! third for targets. Each pass tests gazetteer entries against the step's
//! token set and returns the first match in **gazetteer iteration order**,
//! not text order; at most one entity of each kind is bound per step.
//!
//! Tokens in the stopword set are screened out before matching, so
//! function words can never be mistaken for entities. A step with no
//! match simply leaves the field unset — synthesis supplies defaults.

use std::collections::HashSet;

use crate::nl::vocab::vocab;

/// Entities recognized in one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entities {
    pub object: Option<String>,
    pub location: Option<String>,
    pub target: Option<String>,
}

/// Run all three gazetteer passes over a step's tokens.
pub fn recognize(tokens: &[String]) -> Entities {
    let v = vocab();

    let candidates: HashSet<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|t| !v.stopwords.contains(*t))
        .collect();

    Entities {
        object: first_match(&v.objects, &candidates),
        location: first_match(&v.locations, &candidates),
        target: first_match(&v.targets, &candidates),
    }
}

/// First gazetteer entry present in the candidate token set.
fn first_match(gazetteer: &[String], candidates: &HashSet<&str>) -> Option<String> {
    gazetteer
        .iter()
        .find(|entry| candidates.contains(entry.as_str()))
        .cloned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
