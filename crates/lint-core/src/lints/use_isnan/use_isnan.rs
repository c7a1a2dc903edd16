use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;

const COMPARISON_OPERATORS: &[&str] = &["==", "!=", "===", "!==", "<", ">", "<=", ">="];

pub struct UseIsnan;

/// ## What it does
///
/// Checks for comparisons to `NaN`.
///
/// ## Why is this bad?
///
/// `NaN` is not equal to anything, itself included, so that `a === NaN` is
/// always false and `a !== NaN` always true.
///
/// ## Example
///
/// ```js
/// if (a === NaN) {}
/// ```
///
/// Use instead:
/// ```js
/// if (Number.isNaN(a)) {}
/// ```
impl Violation for UseIsnan {
    fn rule(&self) -> Rule {
        Rule::UseIsnan
    }
    fn body(&self) -> String {
        "Use the isNaN function to compare with NaN.".to_string()
    }
}

/// `node` is a `binary_expression`.
pub fn use_isnan(node: Node, text: &str) -> anyhow::Result<Option<Diagnostic>> {
    let Some(operator) = node.child_by_field_name("operator") else {
        return Ok(None);
    };
    if !COMPARISON_OPERATORS.contains(&operator.kind()) {
        return Ok(None);
    }

    let is_nan = |field: &str| {
        node.child_by_field_name(field)
            .is_some_and(|operand| is_nan(operand, text))
    };
    if !is_nan("left") && !is_nan("right") {
        return Ok(None);
    }

    Ok(Some(Diagnostic::new(UseIsnan, node.byte_range(), None)))
}

fn is_nan(node: Node, text: &str) -> bool {
    match node.kind() {
        "identifier" => &text[node.byte_range()] == "NaN",
        "member_expression" => {
            let part = |field: &str| {
                node.child_by_field_name(field)
                    .map(|part| &text[part.byte_range()])
            };
            part("object") == Some("Number") && part("property") == Some("NaN")
        }
        "parenthesized_expression" => node
            .named_child(0)
            .is_some_and(|inner| is_nan(inner, text)),
        _ => false,
    }
}
