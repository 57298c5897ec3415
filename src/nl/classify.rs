//! Lexical action classification.
//!
//! Per step: consecutive token pairs are scanned against the multi-word
//! lexicon entries first ("turn on", "pick up"); then single tokens against
//! the single-word entries, first match in token order winning; then the
//! verb-ending heuristic (a Spanish infinitive from the closed culinary
//! list classifies as MAKE); finally the DEFAULT category.
//!
//! The classifier never scores or ranks candidates — first match wins.

use serde::Serialize;
use std::fmt;

use crate::nl::vocab::vocab;

// ---------------------------------------------------------------------------
// Action categories
// ---------------------------------------------------------------------------

/// Canonical action category of one instruction step.
///
/// Categories map many-to-one onto domain action templates; see
/// `pddl::domain::template_for`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionCategory {
    Move,
    Pick,
    Place,
    Open,
    Close,
    Use,
    Make,
    Cook,
    Boil,
    TurnOn,
    TurnOff,
    Clean,
    Charge,
    Deliver,
    Transfer,
    Bring,
    Neutralize,
    Locate,
    Assemble,
    Repair,
    Remove,
    Replace,
    Default,
}

impl ActionCategory {
    /// Parse the SCREAMING_SNAKE_CASE name used in the vocabulary pack.
    pub fn parse(name: &str) -> Option<Self> {
        use ActionCategory::*;
        Some(match name {
            "MOVE" => Move,
            "PICK" => Pick,
            "PLACE" => Place,
            "OPEN" => Open,
            "CLOSE" => Close,
            "USE" => Use,
            "MAKE" => Make,
            "COOK" => Cook,
            "BOIL" => Boil,
            "TURN_ON" => TurnOn,
            "TURN_OFF" => TurnOff,
            "CLEAN" => Clean,
            "CHARGE" => Charge,
            "DELIVER" => Deliver,
            "TRANSFER" => Transfer,
            "BRING" => Bring,
            "NEUTRALIZE" => Neutralize,
            "LOCATE" => Locate,
            "ASSEMBLE" => Assemble,
            "REPAIR" => Repair,
            "REMOVE" => Remove,
            "REPLACE" => Replace,
            "DEFAULT" => Default,
            _ => return None,
        })
    }

    /// The SCREAMING_SNAKE_CASE name, matching the vocabulary pack.
    pub fn name(&self) -> &'static str {
        use ActionCategory::*;
        match self {
            Move => "MOVE",
            Pick => "PICK",
            Place => "PLACE",
            Open => "OPEN",
            Close => "CLOSE",
            Use => "USE",
            Make => "MAKE",
            Cook => "COOK",
            Boil => "BOIL",
            TurnOn => "TURN_ON",
            TurnOff => "TURN_OFF",
            Clean => "CLEAN",
            Charge => "CHARGE",
            Deliver => "DELIVER",
            Transfer => "TRANSFER",
            Bring => "BRING",
            Neutralize => "NEUTRALIZE",
            Locate => "LOCATE",
            Assemble => "ASSEMBLE",
            Repair => "REPAIR",
            Remove => "REMOVE",
            Replace => "REPLACE",
            Default => "DEFAULT",
        }
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Assign a category to one step's token list.
pub fn classify(tokens: &[String]) -> ActionCategory {
    let v = vocab();

    // (a) two-token spans first, so "turn on" beats "turn"
    for pair in tokens.windows(2) {
        if let Some(cat) = v.category_of_pair(&pair[0], &pair[1]) {
            return cat;
        }
    }

    // (b) single tokens, first match in token order
    for token in tokens {
        if let Some(cat) = v.category_of(token) {
            return cat;
        }
    }

    // (c) verb-ending heuristic: a culinary infinitive classifies as MAKE
    for token in tokens {
        if has_infinitive_suffix(token) && v.culinary_verbs.contains(token.as_str()) {
            return ActionCategory::Make;
        }
    }

    // (d) nothing qualified
    ActionCategory::Default
}

/// Spanish infinitive suffix check (-ar / -er / -ir).
fn has_infinitive_suffix(token: &str) -> bool {
    token.len() > 2
        && (token.ends_with("ar") || token.ends_with("er") || token.ends_with("ir"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_single_token_match() {
        assert_eq!(classify(&toks("recoge la manzana")), ActionCategory::Pick);
        assert_eq!(classify(&toks("abre la puerta")), ActionCategory::Open);
        assert_eq!(classify(&toks("limpia la mesa")), ActionCategory::Clean);
    }

    #[test]
    fn test_pair_beats_single() {
        // "turn on" must classify as TURN_ON even though neither "turn"
        // nor "on" is a single-word lexicon entry
        assert_eq!(classify(&toks("turn on the lamp")), ActionCategory::TurnOn);
        assert_eq!(classify(&toks("turn off the lamp")), ActionCategory::TurnOff);
    }

    #[test]
    fn test_pick_up_pair() {
        assert_eq!(classify(&toks("pick up the ball")), ActionCategory::Pick);
    }

    #[test]
    fn test_first_match_wins_in_token_order() {
        // Both "recoge" (PICK) and "lleva" (BRING) appear; the earlier
        // token decides
        assert_eq!(classify(&toks("recoge y lleva la taza")), ActionCategory::Pick);
        assert_eq!(classify(&toks("lleva y recoge la taza")), ActionCategory::Bring);
    }

    #[test]
    fn test_culinary_infinitive_heuristic() {
        // "hornear" is not in the lexicon but ends in -ar and is in the
        // culinary list
        assert_eq!(classify(&toks("hornear el pan")), ActionCategory::Make);
        assert_eq!(classify(&toks("freir el pollo")), ActionCategory::Make);
    }

    #[test]
    fn test_non_culinary_infinitive_is_default() {
        assert_eq!(classify(&toks("caminar por la sala")), ActionCategory::Default);
    }

    #[test]
    fn test_no_match_is_default() {
        assert_eq!(classify(&toks("la manzana roja")), ActionCategory::Default);
        assert_eq!(classify(&[]), ActionCategory::Default);
    }

    #[test]
    fn test_category_names_round_trip() {
        for name in [
            "MOVE", "PICK", "PLACE", "OPEN", "CLOSE", "USE", "MAKE", "COOK",
            "BOIL", "TURN_ON", "TURN_OFF", "CLEAN", "CHARGE", "DELIVER",
            "TRANSFER", "BRING", "NEUTRALIZE", "LOCATE", "ASSEMBLE",
            "REPAIR", "REMOVE", "REPLACE", "DEFAULT",
        ] {
            let cat = ActionCategory::parse(name)
                .unwrap_or_else(|| panic!("should parse {}", name));
            assert_eq!(cat.name(), name);
        }
        assert_eq!(ActionCategory::parse("FLY"), None);
    }
}
