//! Order and condition heuristics.
//!
//! Whole-text check: "pero primero" or "antes de" anywhere in the
//! normalized text sets a reverse-order flag. The per-step pipeline never
//! reorders (segmentation already yields intended surface order), so the
//! flag is carried in the meta record for diagnostics only.
//!
//! Per-step check: "pero solo despues de X" records X as the step's
//! condition clause. The clause is free text carried in metadata; it has
//! no synthesis effect today.

/// True when the text uses reversed-order phrasing.
pub fn reversed_order(normalized: &str) -> bool {
    contains_phrase(normalized, "pero primero") || contains_phrase(normalized, "antes de")
}

/// Extract the condition clause from a step, if it uses the
/// "pero solo despues de X" pattern. Returns (step text without the
/// clause, Some(X)) on a match, (step text, None) otherwise.
pub fn split_condition(step_text: &str) -> (String, Option<String>) {
    const PATTERN: &str = "pero solo despues de ";

    if let Some(idx) = find_phrase(step_text, PATTERN.trim_end()) {
        let clause = step_text[idx + PATTERN.len() - 1..].trim().to_string();
        let head = step_text[..idx].trim().to_string();
        if !clause.is_empty() {
            return (head, Some(clause));
        }
    }
    (step_text.to_string(), None)
}

/// Whole-word/phrase containment on space-separated text.
fn contains_phrase(text: &str, phrase: &str) -> bool {
    find_phrase(text, phrase).is_some()
}

/// Byte offset of a phrase matched on word boundaries, if present.
fn find_phrase(text: &str, phrase: &str) -> Option<usize> {
    let mut search_from = 0;
    while let Some(rel) = text[search_from..].find(phrase) {
        let idx = search_from + rel;
        let before_ok = idx == 0 || text.as_bytes()[idx - 1] == b' ';
        let end = idx + phrase.len();
        let after_ok = end == text.len() || text.as_bytes()[end] == b' ';
        if before_ok && after_ok {
            return Some(idx);
        }
        search_from = idx + 1;
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
