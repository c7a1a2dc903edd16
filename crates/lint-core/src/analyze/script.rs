use anyhow::Result;
use tree_sitter::{Node, Tree};

use crate::analyze;
use crate::check::FileChecker;
use crate::lints::indent::indent::{IndentOptions, indent};
use crate::lints::semi::semi::TERMINATED_STATEMENTS;
use crate::rule_set::Rule;

/// Run the script rules on a parsed script.
///
/// `indent` works line by line on the whole document. The other rules are
/// dispatched node by node.
pub fn check_script(tree: &Tree, checker: &mut FileChecker) -> Result<()> {
    if checker.is_rule_enabled(Rule::Indent) {
        let options = IndentOptions {
            spaces: checker.options.script_indent_spaces,
            switch_case: checker.options.switch_case,
        };
        for diagnostic in indent(tree.root_node(), checker.document, options)? {
            checker.report_diagnostic(Some(diagnostic));
        }
    }

    check_node(tree.root_node(), checker)
}

// This function does two things:
// - dispatch a node to its appropriate set of rules, e.g. binary
//   expressions are sent to the rules stored in
//   analyze::binary_expression::binary_expression.
// - apply the function recursively to the node's named children.
//
// Node kinds that no rule looks at are only recursed into.
pub fn check_node(node: Node, checker: &mut FileChecker) -> Result<()> {
    match node.kind() {
        "binary_expression" => analyze::binary_expression::binary_expression(node, checker)?,
        "call_expression" => analyze::call::call(node, checker)?,
        "function_declaration" | "function_expression" | "function" => {
            analyze::function::function(node, checker)?
        }
        "statement_block" | "switch_body" => analyze::block::block(node, checker)?,
        kind if TERMINATED_STATEMENTS.contains(&kind) || kind == "with_statement" => {
            analyze::statement::statement(node, checker)?
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        check_node(child, checker)?;
    }

    Ok(())
}
