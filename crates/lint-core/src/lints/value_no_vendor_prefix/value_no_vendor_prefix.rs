use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;
use crate::utils_style::has_vendor_prefix;

pub struct ValueNoVendorPrefix {
    value: String,
}

/// ## What it does
///
/// Checks for keywords and functions of a declaration's value written with a
/// vendor prefix, such as `-webkit-box` or `-moz-linear-gradient()`.
///
/// ## Why is this bad?
///
/// Prefixed values only work in one engine. Prefixes, when still needed,
/// are better added by a build step.
///
/// ## Example
///
/// ```css
/// a { display: -webkit-flex; }
/// ```
///
/// Use instead:
/// ```css
/// a { display: flex; }
/// ```
impl Violation for ValueNoVendorPrefix {
    fn rule(&self) -> Rule {
        Rule::ValueNoVendorPrefix
    }
    fn body(&self) -> String {
        format!("Unexpected vendor-prefix \"{}\"", self.value)
    }
}

/// `value` is a `plain_value` or the `function_name` of a call in the value
/// of a declaration.
pub fn value_no_vendor_prefix(value: Node, text: &str) -> anyhow::Result<Option<Diagnostic>> {
    let word = &text[value.byte_range()];
    if !has_vendor_prefix(word) {
        return Ok(None);
    }

    let diagnostic = Diagnostic::new(
        ValueNoVendorPrefix { value: word.to_string() },
        value.byte_range(),
        None,
    );
    Ok(Some(diagnostic))
}
