//! Problem synthesis — objects, initial state, and goal formula.
//!
//! The problem document is bound to the domain by name. Entity
//! declarations are the union of everything the goal and init sections
//! mention (referential closure), plus the implicit agent `robot` and base
//! location `home`. Per-step goal contributions follow a fixed per-category
//! policy; a single contribution is emitted bare, two or more are wrapped
//! in a conjunction in step order with no deduplication.
//!
//! When a step needs an entity name but recognition found none, a
//! deterministic name is substituted: a fixed default for door/device/
//! battery/floor-style actions, or an indexed placeholder derived from the
//! category and the 1-based step index.

use crate::nl::classify::ActionCategory;
use crate::nl::Step;
use crate::pddl::{fact, sanitize, DOMAIN_NAME, PROBLEM_NAME};

// ---------------------------------------------------------------------------
// Default and placeholder names
// ---------------------------------------------------------------------------

/// Fixed default object name for categories that have a conventional prop.
fn default_object(category: ActionCategory) -> Option<&'static str> {
    use ActionCategory::*;
    match category {
        Open | Close => Some("door"),
        TurnOn | TurnOff => Some("device"),
        Charge => Some("battery"),
        Clean => Some("floor"),
        _ => None,
    }
}

/// Deterministic placeholder for an unrecognized entity: pure function of
/// (category, 1-based step index), so tests can assert exact strings.
pub fn placeholder(category: ActionCategory, index: usize) -> String {
    use ActionCategory::*;
    let stem = match category {
        Make | Cook | Boil => "dish",
        Neutralize => "target",
        _ => "item",
    };
    format!("{}_{}", stem, index)
}

// ---------------------------------------------------------------------------
// Entity collection
// ---------------------------------------------------------------------------

/// Declared entities, in first-mention order, deduplicated.
#[derive(Debug, Default)]
struct Declarations {
    objects: Vec<String>,
    locations: Vec<String>,
    targets: Vec<String>,
}

impl Declarations {
    fn object(&mut self, name: &str) -> String {
        push_unique(&mut self.objects, name)
    }

    fn location(&mut self, name: &str) -> String {
        push_unique(&mut self.locations, name)
    }

    fn target(&mut self, name: &str) -> String {
        push_unique(&mut self.targets, name)
    }
}

fn push_unique(list: &mut Vec<String>, name: &str) -> String {
    let clean = sanitize(name);
    if !list.contains(&clean) {
        list.push(clean.clone());
    }
    clean
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Synthesize the problem document for an ordered step list.
pub fn synthesize(steps: &[Step]) -> String {
    use ActionCategory::*;

    let mut decls = Declarations::default();
    let mut init: Vec<String> = Vec::new();
    let mut goals: Vec<String> = Vec::new();

    for (i, step) in steps.iter().enumerate() {
        let index = i + 1;
        let category = step.category;

        // The object name every contribution below agrees on: recognized,
        // else the category's fixed default, else an indexed placeholder.
        let object_name = |decls: &mut Declarations| -> String {
            let name = step
                .object
                .clone()
                .or_else(|| default_object(category).map(str::to_string))
                .unwrap_or_else(|| placeholder(category, index));
            decls.object(&name)
        };
        let location_name = |decls: &mut Declarations| -> String {
            let name = step.location.clone().unwrap_or_else(|| "home".to_string());
            decls.location(&name)
        };

        match category {
            Pick => {
                let obj = object_name(&mut decls);
                let loc = location_name(&mut decls);
                // The only category contributing explicit init facts.
                init.push(fact("in", &[&obj, &loc]));
                goals.push(fact("has", &["robot", &obj]));
            }
            Place | Transfer | Bring | Deliver => {
                let obj = object_name(&mut decls);
                let loc = location_name(&mut decls);
                goals.push(fact("in", &[&obj, &loc]));
            }
            Open => {
                let obj = object_name(&mut decls);
                goals.push(fact("open", &[&obj]));
            }
            Close => {
                let obj = object_name(&mut decls);
                goals.push(fact("closed", &[&obj]));
            }
            Make | Cook | Boil => {
                let obj = object_name(&mut decls);
                goals.push(fact("prepared", &[&obj]));
            }
            TurnOn => {
                let obj = object_name(&mut decls);
                goals.push(fact("on", &[&obj]));
            }
            Charge => {
                let obj = object_name(&mut decls);
                goals.push(fact("charged", &[&obj]));
            }
            Clean => {
                let obj = object_name(&mut decls);
                goals.push(fact("clean", &[&obj]));
            }
            Neutralize => {
                let name = step
                    .target
                    .clone()
                    .unwrap_or_else(|| placeholder(category, index));
                let target = decls.target(&name);
                goals.push(fact("neutralized", &[&target]));
            }
            Locate => {
                let obj = object_name(&mut decls);
                let loc = location_name(&mut decls);
                goals.push(fact("in", &[&obj, &loc]));
            }
            // MOVE, USE, ASSEMBLE-family, TURN_OFF, DEFAULT
            _ => {
                goals.push(fact("done", &["robot"]));
            }
        }
    }

    // Degenerate case: no steps at all still yields a well-formed goal.
    if goals.is_empty() {
        goals.push(fact("done", &["robot"]));
    }

    // Init fallback: the base fact is used only when no PICK step placed
    // anything in the world.
    if init.is_empty() {
        init.push(fact("at", &["robot", "home"]));
    }

    // Implicit base location always exists.
    decls.location("home");

    render(&decls, &init, &goals)
}

fn render(decls: &Declarations, init: &[String], goals: &[String]) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("(define (problem {})\n", PROBLEM_NAME));
    doc.push_str(&format!("  (:domain {})\n", DOMAIN_NAME));

    doc.push_str("  (:objects\n");
    doc.push_str("    robot - agent\n");
    if !decls.objects.is_empty() {
        doc.push_str(&format!("    {} - object\n", decls.objects.join(" ")));
    }
    doc.push_str(&format!("    {} - location\n", decls.locations.join(" ")));
    if !decls.targets.is_empty() {
        doc.push_str(&format!("    {} - target\n", decls.targets.join(" ")));
    }
    doc.push_str("  )\n");

    doc.push_str("  (:init\n");
    for f in init {
        doc.push_str(&format!("    {}\n", f));
    }
    doc.push_str("  )\n");

    if goals.len() == 1 {
        doc.push_str(&format!("  (:goal {})\n", goals[0]));
    } else {
        doc.push_str("  (:goal (and\n");
        for g in goals {
            doc.push_str(&format!("    {}\n", g));
        }
        doc.push_str("  ))\n");
    }

    doc.push_str(")\n");
    doc
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
