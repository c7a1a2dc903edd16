use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;

/// Objects through which the global `eval` can be reached.
const GLOBAL_OBJECTS: &[&str] = &["window", "global", "globalThis", "self"];

pub struct NoEval;

/// ## What it does
///
/// Checks for calls to `eval()`, including through the global object
/// (`window.eval()`, `globalThis.eval()`...).
///
/// ## Why is this bad?
///
/// `eval()` runs arbitrary strings as code, which opens the door to
/// injection attacks and defeats most optimizations.
impl Violation for NoEval {
    fn rule(&self) -> Rule {
        Rule::NoEval
    }
    fn body(&self) -> String {
        "eval can be harmful.".to_string()
    }
}

/// `call` is a `call_expression`.
pub fn no_eval(call: Node, text: &str) -> anyhow::Result<Option<Diagnostic>> {
    let Some(function) = call.child_by_field_name("function") else {
        return Ok(None);
    };

    let callee = match function.kind() {
        "identifier" => Some(function),
        "member_expression" => {
            let object = function
                .child_by_field_name("object")
                .map(|object| &text[object.byte_range()]);
            if object.is_some_and(|object| GLOBAL_OBJECTS.contains(&object)) {
                function.child_by_field_name("property")
            } else {
                None
            }
        }
        _ => None,
    };

    let Some(callee) = callee.filter(|callee| &text[callee.byte_range()] == "eval") else {
        return Ok(None);
    };

    Ok(Some(Diagnostic::new(NoEval, callee.byte_range(), None)))
}
