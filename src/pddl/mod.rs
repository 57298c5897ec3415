//! PDDL document synthesis.
//!
//! Emits the two linked plain-text artifacts the external planner consumes:
//! a domain document (`domain`) and a problem document (`problem`). Both are
//! parenthesized S-expression text in fixed layouts; the problem's
//! `:domain` reference must match [`DOMAIN_NAME`] for the pair to be usable
//! together.

pub mod domain;
pub mod problem;

/// Declared name of every generated domain document.
pub const DOMAIN_NAME: &str = "generated_domain";

/// Declared name of every generated problem document.
pub const PROBLEM_NAME: &str = "generated-problem";

/// Make a recognized surface string safe as a PDDL identifier:
/// spaces become underscores. Gazetteer entries are single lowercase
/// words already; this guards literal multi-word captures.
pub fn sanitize(name: &str) -> String {
    name.trim().replace(' ', "_")
}

/// Render a ground fact: `(pred arg arg ...)`.
pub fn fact(pred: &str, args: &[&str]) -> String {
    let mut s = String::from("(");
    s.push_str(pred);
    for arg in args {
        s.push(' ');
        s.push_str(arg);
    }
    s.push(')');
    s
}
