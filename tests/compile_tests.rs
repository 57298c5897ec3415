//! End-to-end compilation scenarios: instruction text in, document pair out.

use mandato::compiler::{self, Compilation};

fn compile(input: &str) -> Compilation {
    compiler::compile(input)
}

#[test]
fn test_pick_scenario() {
    let c = compile("El robot debe recoger una manzana de la mesa.");

    assert_eq!(c.meta.steps.len(), 1, "one step expected");
    let step = &c.meta.steps[0];
    assert_eq!(step.category.name(), "PICK");
    assert_eq!(step.object.as_deref(), Some("manzana"));
    assert_eq!(step.location.as_deref(), Some("mesa"));

    assert!(c.problem.contains("(in manzana mesa)"), "init fact: {}", c.problem);
    assert!(
        c.problem.contains("(:goal (has robot manzana))"),
        "bare goal: {}",
        c.problem
    );
    assert!(c.domain.contains("(:action pick"));
}

#[test]
fn test_empty_instruction_degrades_gracefully() {
    let c = compile("");

    assert!(c.meta.steps.is_empty());
    assert!(!c.domain.is_empty());
    assert!(!c.problem.is_empty());
    assert!(c.domain.contains("(:predicates"), "predicate set retained");
    assert!(!c.domain.contains("(:action"), "no action blocks for zero steps");
    assert!(c.problem.contains("(:goal (done robot))"), "generic fallback goal");
}

#[test]
fn test_open_close_conjunction_in_order() {
    let c = compile("abrir la puerta y cerrar la ventana");

    assert_eq!(c.meta.categories, vec!["OPEN", "CLOSE"]);
    assert!(c.problem.contains("(:goal (and"), "two goals wrap in a conjunction");
    let open_at = c.problem.find("(open puerta)").expect("open goal");
    let close_at = c.problem.find("(closed ventana)").expect("close goal");
    assert!(open_at < close_at, "goals follow step order");
}

#[test]
fn test_action_block_count_idempotent_under_repetition() {
    let c = compile("recoge la manzana, recoge la taza, recoge el plato");
    assert_eq!(c.meta.steps.len(), 3);
    assert_eq!(c.domain.matches("(:action").count(), 1, "domain: {}", c.domain);
}

#[test]
fn test_referential_closure() {
    let c = compile("recoge la manzana de la mesa y lleva la manzana a la cocina");

    // every name used in init/goal also appears in the declarations
    let decl_section = {
        let start = c.problem.find("(:objects").expect("objects section");
        let end = c.problem.find("(:init").expect("init section");
        &c.problem[start..end]
    };
    for name in ["manzana", "mesa", "cocina", "robot", "home"] {
        assert!(
            decl_section.contains(name),
            "{} must be declared; section: {}",
            name,
            decl_section
        );
    }
}

#[test]
fn test_pairability_invariant() {
    let c = compile("limpia el suelo");
    assert!(c.domain.contains("(define (domain generated_domain)"));
    assert!(c.problem.contains("(:domain generated_domain)"));
}

#[test]
fn test_determinism() {
    let input = "abre la puerta, prepara la cena y luego apaga la luz";
    let a = compile(input);
    let b = compile(input);
    assert_eq!(a.domain, b.domain);
    assert_eq!(a.problem, b.problem);
}

#[test]
fn test_reversed_order_flag_is_metadata_only() {
    let c = compile("lleva la taza a la cocina pero primero abre la puerta");
    assert!(c.meta.reversed_order);
    // primary pipeline keeps surface order
    assert_eq!(c.meta.categories.first().map(String::as_str), Some("BRING"));
}

#[test]
fn test_condition_clause_is_captured_not_synthesized() {
    let c = compile("enciende el horno pero solo despues de abrir la puerta");
    assert_eq!(c.meta.steps.len(), 1);
    let step = &c.meta.steps[0];
    assert_eq!(step.category.name(), "TURN_ON");
    assert_eq!(step.condition.as_deref(), Some("abrir la puerta"));
    // condition text never leaks into the documents
    assert!(!c.domain.contains("abrir la puerta"));
    assert!(!c.problem.contains("abrir la puerta"));
}

#[test]
fn test_mixed_language_instruction() {
    let c = compile("pick up the cup and then clean the table");
    assert_eq!(c.meta.categories, vec!["PICK", "CLEAN"]);
    assert!(c.problem.contains("(has robot cup)") || c.problem.contains("(has robot taza)"));
}

#[test]
fn test_diacritics_and_punctuation_normalized() {
    let c = compile("  Recoger   la MANZANA de la mesa, después limpiar la cocina ");
    assert_eq!(c.meta.categories, vec!["PICK", "CLEAN"]);
    assert!(!c.meta.normalized.contains("é"));
    assert!(!c.meta.normalized.contains("  "));
}

#[test]
fn test_unrecognized_step_still_yields_wellformed_pair() {
    let c = compile("zzz qqq www");
    assert_eq!(c.meta.categories, vec!["DEFAULT"]);
    assert!(c.domain.contains("(:action default"));
    assert!(c.problem.contains("(:goal (done robot)"));
}
