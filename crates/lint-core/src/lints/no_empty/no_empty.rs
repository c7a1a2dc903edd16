use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;

/// Nodes whose body may be an empty block.
const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "function_expression",
    "function",
    "generator_function_declaration",
    "generator_function",
    "arrow_function",
    "method_definition",
];

pub struct NoEmpty {
    what: &'static str,
}

/// ## What it does
///
/// Checks for empty blocks and empty `switch` statements. Function bodies
/// are allowed to be empty, and a block holding a comment is not empty.
///
/// ## Why is this bad?
///
/// An empty block is usually unfinished code, or an error that is silently
/// swallowed by an empty `catch`.
///
/// ## Example
///
/// ```js
/// try {
///   run()
/// } catch (e) {}
/// ```
///
/// Use instead:
/// ```js
/// try {
///   run()
/// } catch (e) {
///   // Failing to run is fine here
/// }
/// ```
impl Violation for NoEmpty {
    fn rule(&self) -> Rule {
        Rule::NoEmpty
    }
    fn body(&self) -> String {
        format!("Empty {} statement.", self.what)
    }
}

/// `node` is a `statement_block` or a `switch_body`.
pub fn no_empty(node: Node) -> anyhow::Result<Option<Diagnostic>> {
    let (what, range) = match node.kind() {
        "statement_block" => {
            if node
                .parent()
                .is_some_and(|parent| FUNCTION_KINDS.contains(&parent.kind()))
            {
                return Ok(None);
            }
            ("block", node.byte_range())
        }
        // Reported on the whole `switch`, the body only holds the cases.
        "switch_body" => match node.parent() {
            Some(switch) => ("switch", switch.byte_range()),
            None => return Ok(None),
        },
        _ => return Ok(None),
    };

    // Comments count as content.
    if node.named_child_count() > 0 {
        return Ok(None);
    }

    Ok(Some(Diagnostic::new(NoEmpty { what }, range, None)))
}
