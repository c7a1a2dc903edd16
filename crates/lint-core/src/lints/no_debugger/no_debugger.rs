use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;

pub struct NoDebugger;

/// ## What it does
///
/// Checks for `debugger` statements.
///
/// ## Why is this bad?
///
/// `debugger` pauses the execution whenever developer tools are open. It is
/// useful while debugging but should never be committed.
impl Violation for NoDebugger {
    fn rule(&self) -> Rule {
        Rule::NoDebugger
    }
    fn body(&self) -> String {
        "Unexpected 'debugger' statement.".to_string()
    }
}

pub fn no_debugger(node: Node) -> anyhow::Result<Option<Diagnostic>> {
    Ok(Some(Diagnostic::new(NoDebugger, node.byte_range(), None)))
}
