//! Compiler entry point — instruction text in, document pair out.
//!
//! `compile` is the single contract the front-ends consume: it never fails
//! on text input (empty included), always terminates, and is deterministic
//! — the same instruction yields byte-identical documents. The meta record
//! carries enough structure for a caller to render diagnostics without
//! recomputation.

use serde::Serialize;

use crate::nl::{self, Step};
use crate::pddl;

/// The compiled artifact pair plus its analysis record.
#[derive(Debug, Clone, Serialize)]
pub struct Compilation {
    /// Planning-domain document text.
    pub domain: String,
    /// Problem-instance document text.
    pub problem: String,
    /// Analysis record for diagnostics.
    pub meta: Meta,
}

/// Everything the caller needs to see how the documents came to be.
#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    /// The instruction as received.
    pub raw: String,
    /// The normalized instruction.
    pub normalized: String,
    /// Ordered step records.
    pub steps: Vec<Step>,
    /// Action category names in step order.
    pub categories: Vec<String>,
    /// Reversed-order phrasing was detected ("pero primero", "antes de").
    pub reversed_order: bool,
}

/// Compile one instruction into a (domain, problem, meta) triple.
pub fn compile(instruction: &str) -> Compilation {
    let analysis = nl::analyze(instruction);

    let categories: Vec<_> = analysis.steps.iter().map(|s| s.category).collect();
    let domain = pddl::domain::synthesize(&categories);
    let problem = pddl::problem::synthesize(&analysis.steps);

    Compilation {
        domain,
        problem,
        meta: Meta {
            raw: instruction.to_string(),
            normalized: analysis.normalized,
            categories: categories.iter().map(|c| c.name().to_string()).collect(),
            steps: analysis.steps,
            reversed_order: analysis.reversed_order,
        },
    }
}

/// Short human-readable summary of a compilation, for the REPL.
pub fn summarize(c: &Compilation) -> String {
    if c.meta.steps.is_empty() {
        return "no steps recognized".to_string();
    }
    let parts: Vec<String> = c
        .meta
        .steps
        .iter()
        .map(|s: &Step| {
            let mut part = s.category.name().to_lowercase();
            if let Some(obj) = &s.object {
                part.push(' ');
                part.push_str(obj);
            }
            if let Some(loc) = &s.location {
                part.push_str(" @ ");
                part.push_str(loc);
            }
            part
        })
        .collect();
    format!("{} step(s): {}", c.meta.steps.len(), parts.join(" -> "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_never_empty_documents() {
        for input in ["", "recoge la manzana", "asdf", "   "] {
            let c = compile(input);
            assert!(!c.domain.is_empty(), "domain for {:?}", input);
            assert!(!c.problem.is_empty(), "problem for {:?}", input);
        }
    }

    #[test]
    fn test_compile_deterministic() {
        let a = compile("recoge la manzana de la mesa y lleva la manzana a la cocina");
        let b = compile("recoge la manzana de la mesa y lleva la manzana a la cocina");
        assert_eq!(a.domain, b.domain);
        assert_eq!(a.problem, b.problem);
    }

    #[test]
    fn test_meta_carries_analysis() {
        let c = compile("Recoger una manzana de la mesa.");
        assert_eq!(c.meta.raw, "Recoger una manzana de la mesa.");
        assert_eq!(c.meta.normalized, "recoger una manzana de la mesa.");
        assert_eq!(c.meta.categories, vec!["PICK"]);
        assert_eq!(c.meta.steps.len(), 1);
    }

    #[test]
    fn test_meta_serializes_to_json() {
        let c = compile("abre la puerta");
        let json = serde_json::to_value(&c).expect("compilation should serialize");
        assert_eq!(json["meta"]["categories"][0], "OPEN");
        assert!(json["domain"].as_str().unwrap().contains("generated_domain"));
    }

    #[test]
    fn test_summarize() {
        let c = compile("recoge la manzana de la mesa");
        let s = summarize(&c);
        assert!(s.contains("pick"), "summary: {}", s);
        assert!(s.contains("manzana"), "summary: {}", s);
    }

    #[test]
    fn test_summarize_empty() {
        let c = compile("");
        assert_eq!(summarize(&c), "no steps recognized");
    }
}
