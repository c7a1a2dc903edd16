use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;
use crate::utils_style::has_vendor_prefix;

pub struct AtRuleNoVendorPrefix {
    at_rule: String,
}

/// ## What it does
///
/// Checks for at-rules written with a vendor prefix, such as
/// `@-webkit-keyframes`.
///
/// ## Why is this bad?
///
/// Every browser supports the unprefixed at-rules. Prefixes, when still
/// needed, are better added by a build step.
///
/// ## Example
///
/// ```css
/// @-webkit-keyframes spin { from { opacity: 0; } }
/// ```
///
/// Use instead:
/// ```css
/// @keyframes spin { from { opacity: 0; } }
/// ```
impl Violation for AtRuleNoVendorPrefix {
    fn rule(&self) -> Rule {
        Rule::AtRuleNoVendorPrefix
    }
    fn body(&self) -> String {
        format!("Unexpected vendor-prefixed at-rule \"{}\"", self.at_rule)
    }
}

/// `at_keyword` is the `@name` of an at-rule.
pub fn at_rule_no_vendor_prefix(
    at_keyword: Node,
    text: &str,
) -> anyhow::Result<Option<Diagnostic>> {
    let at_rule = &text[at_keyword.byte_range()];
    if !has_vendor_prefix(at_rule.trim_start_matches('@')) {
        return Ok(None);
    }

    let diagnostic = Diagnostic::new(
        AtRuleNoVendorPrefix { at_rule: at_rule.to_string() },
        at_keyword.byte_range(),
        None,
    );
    Ok(Some(diagnostic))
}
