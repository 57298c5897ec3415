//! Natural-language analysis layer.
//!
//! A deterministic adapter that converts free-form Spanish/English task
//! instructions into an ordered list of classified steps. Pipeline:
//!
//! 1. **Normalization** — case fold, diacritic fold, whitespace collapse (`normalize`)
//! 2. **Segmentation** — fixed separator patterns → ordered fragments (`segment`)
//! 3. **Classification** — verb lexicon, pairs before singles (`classify`)
//! 4. **Entity recognition** — gazetteer passes per step (`entity`)
//! 5. **Order/condition heuristics** — reverse flag + condition clauses (`order`)
//!
//! The analysis is pure and stateless: one instruction in, one `Analysis`
//! out, no shared mutable state, bounded time in the input length.

pub mod classify;
pub mod entity;
pub mod normalize;
pub mod order;
pub mod segment;
pub mod vocab;

use serde::Serialize;

use classify::ActionCategory;

// ---------------------------------------------------------------------------
// Step — one recognized instruction fragment
// ---------------------------------------------------------------------------

/// One segmented fragment of an instruction, carrying its action category
/// and optional entity bindings. Built once during analysis, immutable
/// afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    /// The fragment as the segmenter produced it.
    pub raw: String,
    /// Normalized word tokens of the fragment.
    pub tokens: Vec<String>,
    /// Assigned action category (never absent; DEFAULT when nothing matched).
    pub category: ActionCategory,
    /// Recognized object name, at most one.
    pub object: Option<String>,
    /// Recognized location name, at most one.
    pub location: Option<String>,
    /// Recognized target name, at most one.
    pub target: Option<String>,
    /// Condition clause from "pero solo despues de X" phrasing.
    /// Carried in metadata only; no synthesis effect today.
    pub condition: Option<String>,
}

/// Result of analyzing one instruction.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// The normalized instruction text.
    pub normalized: String,
    /// Ordered step records, surface order.
    pub steps: Vec<Step>,
    /// True when the text used reversed-order phrasing ("pero primero",
    /// "antes de"). Diagnostic only — segmentation already yields the
    /// intended order, so no reordering is performed.
    pub reversed_order: bool,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyze a raw instruction into classified, entity-bound steps.
///
/// Total over all inputs: empty or unparseable text yields an `Analysis`
/// with zero steps, never an error.
pub fn analyze(instruction: &str) -> Analysis {
    // 1. Normalize
    let normalized = normalize::normalize(instruction);

    // 2. Segment into ordered fragments
    let fragments = segment::segment(&normalized);

    // 3-5. Classify, recognize, and capture conditions per fragment
    let steps = fragments.into_iter().map(build_step).collect();

    Analysis {
        reversed_order: order::reversed_order(&normalized),
        normalized,
        steps,
    }
}

fn build_step(fragment: String) -> Step {
    let (head, condition) = order::split_condition(&fragment);

    // Classification and recognition see the fragment without its
    // condition clause, so clause nouns never bind as step entities.
    let tokens = normalize::tokenize(&head);
    let category = classify::classify(&tokens);
    let entities = entity::recognize(&tokens);

    Step {
        raw: fragment,
        tokens,
        category,
        object: entities.object,
        location: entities.location,
        target: entities.target,
        condition,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pick_step() {
        let a = analyze("El robot debe recoger una manzana de la mesa.");
        assert_eq!(a.steps.len(), 1);
        let step = &a.steps[0];
        assert_eq!(step.category, ActionCategory::Pick);
        assert_eq!(step.object.as_deref(), Some("manzana"));
        assert_eq!(step.location.as_deref(), Some("mesa"));
        assert_eq!(step.condition, None);
        assert!(!a.reversed_order);
    }

    #[test]
    fn test_two_steps_in_order() {
        let a = analyze("abrir la puerta y cerrar la ventana");
        assert_eq!(a.steps.len(), 2);
        assert_eq!(a.steps[0].category, ActionCategory::Open);
        assert_eq!(a.steps[1].category, ActionCategory::Close);
        assert_eq!(a.steps[0].object.as_deref(), Some("puerta"));
        assert_eq!(a.steps[1].object.as_deref(), Some("ventana"));
    }

    #[test]
    fn test_empty_instruction() {
        let a = analyze("");
        assert!(a.steps.is_empty());
        assert_eq!(a.normalized, "");
    }

    #[test]
    fn test_whitespace_only_instruction() {
        let a = analyze("   \t\n  ");
        assert!(a.steps.is_empty());
    }

    #[test]
    fn test_reversed_order_flag_set() {
        let a = analyze("lleva la taza a la cocina pero primero abre la puerta");
        assert!(a.reversed_order);
    }

    #[test]
    fn test_condition_clause_captured() {
        let a = analyze("limpia la mesa pero solo despues de la cena");
        assert_eq!(a.steps.len(), 1);
        let step = &a.steps[0];
        assert_eq!(step.category, ActionCategory::Clean);
        assert_eq!(step.condition.as_deref(), Some("la cena"));
        // clause nouns must not bind as entities
        assert_eq!(step.location.as_deref(), Some("mesa"));
    }

    #[test]
    fn test_mixed_language_instruction() {
        let a = analyze("recoge la manzana and then bring the cup to the kitchen");
        assert_eq!(a.steps.len(), 2);
        assert_eq!(a.steps[0].category, ActionCategory::Pick);
        assert_eq!(a.steps[1].category, ActionCategory::Bring);
        assert_eq!(a.steps[1].object.as_deref(), Some("cup"));
        assert_eq!(a.steps[1].location.as_deref(), Some("kitchen"));
    }

    #[test]
    fn test_diacritics_in_instruction() {
        let a = analyze("Ve a la habitación y después limpia la mesa");
        assert_eq!(a.steps.len(), 2);
        assert_eq!(a.steps[0].category, ActionCategory::Move);
        assert_eq!(a.steps[0].location.as_deref(), Some("habitacion"));
        assert_eq!(a.steps[1].category, ActionCategory::Clean);
    }

    #[test]
    fn test_gibberish_is_default_step() {
        let a = analyze("asdf qwer zxcv");
        assert_eq!(a.steps.len(), 1);
        assert_eq!(a.steps[0].category, ActionCategory::Default);
        assert_eq!(a.steps[0].object, None);
    }
}
