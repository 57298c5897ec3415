//! Domain synthesis — types, predicates, and action templates.
//!
//! The domain document carries a fixed type list, a fixed predicate block
//! (emitted once, unconditionally), and one action block per distinct
//! template among the step categories. Category → template is a closed
//! many-to-one mapping (MAKE and COOK both yield `prepare`; the
//! deliver family collapses to `deliver`; the maintenance family to
//! `assemble`). Templates are parameterized by name only.

use crate::nl::classify::ActionCategory;
use crate::pddl::DOMAIN_NAME;

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// One action template: typed parameters, precondition, effect.
/// `precondition: None` means always applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTemplate {
    pub name: &'static str,
    pub parameters: &'static str,
    pub precondition: Option<&'static str>,
    pub effect: &'static str,
}

/// The closed category → template mapping.
///
/// `Default` (and, defensively, anything a future edit might add without
/// extending this table) yields a no-op generic block via
/// [`generic_template`].
pub fn template_for(category: ActionCategory) -> Option<ActionTemplate> {
    use ActionCategory::*;
    let t = match category {
        Move => ActionTemplate {
            name: "move",
            parameters: "(?a - agent ?from - location ?to - location)",
            precondition: Some("(at ?a ?from)"),
            effect: "(and (not (at ?a ?from)) (at ?a ?to))",
        },
        Pick => ActionTemplate {
            name: "pick",
            parameters: "(?a - agent ?o - object ?l - location)",
            precondition: Some("(and (at ?a ?l) (in ?o ?l))"),
            effect: "(and (has ?a ?o) (not (in ?o ?l)))",
        },
        Place => ActionTemplate {
            name: "place",
            parameters: "(?a - agent ?o - object ?l - location)",
            precondition: Some("(and (at ?a ?l) (has ?a ?o))"),
            effect: "(and (in ?o ?l) (not (has ?a ?o)))",
        },
        Open => ActionTemplate {
            name: "open",
            parameters: "(?a - agent ?o - object)",
            precondition: Some("(closed ?o)"),
            effect: "(and (open ?o) (not (closed ?o)))",
        },
        Close => ActionTemplate {
            name: "close",
            parameters: "(?a - agent ?o - object)",
            precondition: Some("(open ?o)"),
            effect: "(and (closed ?o) (not (open ?o)))",
        },
        Use => ActionTemplate {
            name: "use",
            parameters: "(?a - agent ?o - object)",
            precondition: Some("(has ?a ?o)"),
            effect: "(done ?a)",
        },
        Make | Cook => ActionTemplate {
            name: "prepare",
            parameters: "(?a - agent ?o - object)",
            precondition: None,
            effect: "(prepared ?o)",
        },
        Boil => ActionTemplate {
            name: "boil",
            parameters: "(?a - agent ?o - object)",
            precondition: None,
            effect: "(and (heated ?o) (prepared ?o))",
        },
        TurnOn | TurnOff => ActionTemplate {
            name: "turn_on",
            parameters: "(?a - agent ?o - object)",
            precondition: None,
            effect: "(on ?o)",
        },
        Clean => ActionTemplate {
            name: "clean",
            parameters: "(?a - agent ?o - object)",
            precondition: None,
            effect: "(clean ?o)",
        },
        Charge => ActionTemplate {
            name: "charge",
            parameters: "(?a - agent ?o - object)",
            precondition: None,
            effect: "(charged ?o)",
        },
        Neutralize => ActionTemplate {
            name: "neutralize",
            parameters: "(?a - agent ?t - target ?l - location)",
            precondition: Some("(at ?a ?l)"),
            effect: "(neutralized ?t)",
        },
        Locate => ActionTemplate {
            name: "locate",
            parameters: "(?a - agent ?o - object ?l - location)",
            precondition: None,
            effect: "(in ?o ?l)",
        },
        Deliver | Transfer | Bring => ActionTemplate {
            name: "deliver",
            parameters: "(?a - agent ?o - object ?from - location ?to - location)",
            precondition: Some("(and (at ?a ?from) (in ?o ?from))"),
            effect: "(and (not (in ?o ?from)) (in ?o ?to))",
        },
        Assemble | Repair | Remove | Replace => ActionTemplate {
            name: "assemble",
            parameters: "(?a - agent ?o - object ?l - location)",
            precondition: Some("(at ?a ?l)"),
            effect: "(done ?a)",
        },
        Default => return None,
    };
    Some(t)
}

/// No-op generic block for a category outside the template table.
fn generic_block(category: ActionCategory) -> String {
    let name = category.name().to_lowercase();
    format!(
        "  (:action {name}\n    :parameters (?a - agent)\n    :effect (and)\n  )\n"
    )
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

const TYPES: &str = "agent object location target";

// Emitted once, unconditionally. Includes `on` and `done`, which the goal
// table emits, so the pair stays referentially closed.
const PREDICATES: &str = "\
  (:predicates
    (at ?a - agent ?l - location)
    (in ?o - object ?l - location)
    (has ?a - agent ?o - object)
    (prepared ?o - object)
    (heated ?o - object)
    (open ?o - object)
    (closed ?o - object)
    (charged ?o - object)
    (clean ?o - object)
    (neutralized ?t - target)
    (on ?o - object)
    (done ?a - agent)
  )
";

/// Synthesize the domain document for the categories present in a request.
///
/// Duplicate categories collapse; categories sharing a template emit one
/// block (action names inside the document are unique). Block order follows
/// first appearance in the input.
pub fn synthesize(categories: &[ActionCategory]) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("(define (domain {})\n", DOMAIN_NAME));
    doc.push_str("  (:requirements :strips :typing)\n");
    doc.push_str(&format!("  (:types {})\n", TYPES));
    doc.push_str(PREDICATES);

    let mut seen: Vec<String> = Vec::new();
    for &category in categories {
        match template_for(category) {
            Some(t) => {
                if seen.iter().any(|s| s == t.name) {
                    continue;
                }
                seen.push(t.name.to_string());
                doc.push_str(&render_block(&t));
            }
            None => {
                let name = category.name().to_lowercase();
                if seen.contains(&name) {
                    continue;
                }
                doc.push_str(&generic_block(category));
                seen.push(name);
            }
        }
    }

    doc.push_str(")\n");
    doc
}

fn render_block(t: &ActionTemplate) -> String {
    let mut block = String::new();
    block.push_str(&format!("  (:action {}\n", t.name));
    block.push_str(&format!("    :parameters {}\n", t.parameters));
    if let Some(pre) = t.precondition {
        block.push_str(&format!("    :precondition {}\n", pre));
    }
    block.push_str(&format!("    :effect {}\n", t.effect));
    block.push_str("  )\n");
    block
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ActionCategory::*;

    #[test]
    fn test_empty_categories_still_has_predicates() {
        let doc = synthesize(&[]);
        assert!(doc.contains("(define (domain generated_domain)"));
        assert!(doc.contains("(:predicates"));
        assert!(doc.contains("(neutralized ?t - target)"));
        assert!(!doc.contains("(:action"));
    }

    #[test]
    fn test_one_block_per_distinct_category() {
        let doc = synthesize(&[Pick, Open, Close]);
        assert_eq!(doc.matches("(:action").count(), 3);
        assert!(doc.contains("(:action pick"));
        assert!(doc.contains("(:action open"));
        assert!(doc.contains("(:action close"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let doc = synthesize(&[Pick, Pick, Pick]);
        assert_eq!(doc.matches("(:action").count(), 1);
    }

    #[test]
    fn test_shared_template_emitted_once() {
        // MAKE and COOK both map to prepare; action names stay unique
        let doc = synthesize(&[Make, Cook]);
        assert_eq!(doc.matches("(:action").count(), 1);
        assert!(doc.contains("(:action prepare"));
    }

    #[test]
    fn test_deliver_family_collapses() {
        let doc = synthesize(&[Deliver, Transfer, Bring]);
        assert_eq!(doc.matches("(:action").count(), 1);
        assert!(doc.contains("(:action deliver"));
    }

    #[test]
    fn test_default_category_gets_generic_block() {
        let doc = synthesize(&[Default]);
        assert_eq!(doc.matches("(:action").count(), 1);
        assert!(doc.contains("(:action default"));
        assert!(doc.contains(":effect (and)"));
    }

    #[test]
    fn test_block_order_follows_first_appearance() {
        let doc = synthesize(&[Close, Open]);
        let close_at = doc.find("(:action close").expect("close block");
        let open_at = doc.find("(:action open").expect("open block");
        assert!(close_at < open_at);
    }

    #[test]
    fn test_turn_family_shares_template() {
        let doc = synthesize(&[TurnOn, TurnOff]);
        assert_eq!(doc.matches("(:action").count(), 1);
        assert!(doc.contains("(:action turn_on"));
    }

    #[test]
    fn test_predicate_block_emitted_once() {
        let doc = synthesize(&[Pick, Place, Clean]);
        assert_eq!(doc.matches("(:predicates").count(), 1);
    }
}
