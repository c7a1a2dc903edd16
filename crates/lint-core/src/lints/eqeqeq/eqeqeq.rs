use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;

pub struct Eqeqeq {
    expected: &'static str,
    actual: &'static str,
}

/// ## What it does
///
/// Checks for loose equality operators (`==` and `!=`).
///
/// ## Why is this bad?
///
/// Loose equality converts its operands before comparing them, so that
/// `'' == 0` and `'0' == false` are both true.
///
/// Comparisons to `null` are the exception: `a == null` is the idiomatic
/// way to check for both `null` and `undefined`, so it is required instead
/// of `a === null`.
///
/// ## Example
///
/// ```js
/// if (a == 1) {}
/// if (b === null) {}
/// ```
///
/// Use instead:
/// ```js
/// if (a === 1) {}
/// if (b == null) {}
/// ```
impl Violation for Eqeqeq {
    fn rule(&self) -> Rule {
        Rule::Eqeqeq
    }
    fn body(&self) -> String {
        format!(
            "Expected '{}' and instead saw '{}'.",
            self.expected, self.actual
        )
    }
}

/// `node` is a `binary_expression`.
pub fn eqeqeq(node: Node) -> anyhow::Result<Option<Diagnostic>> {
    let Some(operator) = node.child_by_field_name("operator") else {
        return Ok(None);
    };

    let is_null = |field: &str| {
        node.child_by_field_name(field)
            .is_some_and(|operand| operand.kind() == "null")
    };
    let against_null = is_null("left") || is_null("right");

    let (expected, actual) = match (operator.kind(), against_null) {
        ("==", false) => ("===", "=="),
        ("!=", false) => ("!==", "!="),
        ("===", true) => ("==", "==="),
        ("!==", true) => ("!=", "!=="),
        _ => return Ok(None),
    };

    let diagnostic = Diagnostic::new(Eqeqeq { expected, actual }, operator.byte_range(), None);
    Ok(Some(diagnostic))
}
