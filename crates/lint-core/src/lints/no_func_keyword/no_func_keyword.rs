use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;

pub struct NoFuncKeyword;

/// ## What it does
///
/// Checks for functions defined with the `function` keyword.
///
/// ## Why is this bad?
///
/// Arrow functions are shorter and don't rebind `this`, which removes a
/// common source of confusion in callbacks.
///
/// Generators can't be written as arrow functions and are allowed, as are
/// functions used as values of object properties, where `this` usually
/// refers to the object.
///
/// ## Example
///
/// ```js
/// function add(a, b) {
///   return a + b
/// }
/// items.map(function (item) { return item.id })
/// ```
///
/// Use instead:
/// ```js
/// const add = (a, b) => a + b
/// items.map((item) => item.id)
/// ```
impl Violation for NoFuncKeyword {
    fn rule(&self) -> Rule {
        Rule::NoFuncKeyword
    }
    fn body(&self) -> String {
        "Use an arrow function instead".to_string()
    }
}

/// `node` is a function declaration or a function expression. Generators
/// have node kinds of their own and never reach this rule.
pub fn no_func_keyword(node: Node) -> anyhow::Result<Option<Diagnostic>> {
    let is_property_value = node
        .parent()
        .is_some_and(|parent| matches!(parent.kind(), "pair" | "method_definition"));
    if is_property_value {
        return Ok(None);
    }

    let diagnostic = Diagnostic::new(NoFuncKeyword, node.byte_range(), None);
    Ok(Some(diagnostic))
}
