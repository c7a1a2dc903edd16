use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;

/// Statements terminated by a semicolon.
pub const TERMINATED_STATEMENTS: &[&str] = &[
    "expression_statement",
    "lexical_declaration",
    "variable_declaration",
    "return_statement",
    "throw_statement",
    "break_statement",
    "continue_statement",
    "debugger_statement",
    "import_statement",
    "export_statement",
    "do_statement",
];

/// A line starting with one of these continues the statement of the
/// previous line when the latter doesn't end with a semicolon.
const CONTINUATION_CHARS: &[char] = &['[', '(', '`', '+', '-', '/'];

pub struct Semi;

/// ## What it does
///
/// Checks for semicolons terminating statements.
///
/// ## Why is this bad?
///
/// Automatic semicolon insertion makes them redundant, except before a line
/// starting with `[`, `(`, `` ` ``, `+`, `-` or `/`, which would otherwise
/// continue the previous statement. Those semicolons are kept.
///
/// ## Example
///
/// ```js
/// const a = 1;
/// log(a);
/// ```
///
/// Use instead:
/// ```js
/// const a = 1
/// log(a)
/// ```
impl Violation for Semi {
    fn rule(&self) -> Rule {
        Rule::Semi
    }
    fn body(&self) -> String {
        "Extra semicolon.".to_string()
    }
}

/// `statement` has one of the [TERMINATED_STATEMENTS] kinds.
pub fn semi(statement: Node, text: &str) -> anyhow::Result<Option<Diagnostic>> {
    // The semicolons of `for (init; test; update)` are part of the syntax.
    if statement
        .parent()
        .is_some_and(|parent| matches!(parent.kind(), "for_statement" | "for_in_statement"))
    {
        return Ok(None);
    }

    let Some(semicolon) = statement
        .child(statement.child_count().saturating_sub(1))
        .filter(|last| last.kind() == ";" && &text[last.byte_range()] == ";")
    else {
        return Ok(None);
    };

    if !is_redundant(semicolon, text) {
        return Ok(None);
    }

    let range = semicolon.byte_range();
    let diagnostic = Diagnostic::new(Semi, range.clone(), Some(Fix::delete(range)));
    Ok(Some(diagnostic))
}

fn is_redundant(semicolon: Node, text: &str) -> bool {
    let Some(next) = next_token(semicolon) else {
        // End of the script
        return true;
    };

    if next.kind() == "}" {
        return true;
    }

    // Semicolons between two statements of one line are required.
    if next.start_position().row == semicolon.end_position().row {
        return false;
    }

    !text[next.byte_range()].starts_with(CONTINUATION_CHARS)
}

/// The first token after `node`, skipping comments.
fn next_token(node: Node) -> Option<Node> {
    let mut current = node;
    loop {
        let Some(sibling) = current.next_sibling() else {
            current = current.parent()?;
            continue;
        };

        let mut leaf = sibling;
        while let Some(child) = leaf.child(0) {
            leaf = child;
        }

        if leaf.kind() == "comment" || leaf.start_byte() == leaf.end_byte() {
            current = leaf;
            continue;
        }
        return Some(leaf);
    }
}
