use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;

pub struct NoWith;

/// ## What it does
///
/// Checks for `with` statements.
///
/// ## Why is this bad?
///
/// `with` makes it impossible to tell whether a name refers to a variable
/// or to a property of the object. It is forbidden in strict mode.
impl Violation for NoWith {
    fn rule(&self) -> Rule {
        Rule::NoWith
    }
    fn body(&self) -> String {
        "Unexpected use of 'with' statement.".to_string()
    }
}

pub fn no_with(node: Node) -> anyhow::Result<Option<Diagnostic>> {
    Ok(Some(Diagnostic::new(NoWith, node.byte_range(), None)))
}
