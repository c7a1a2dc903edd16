use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;
use crate::utils_style::has_vendor_prefix;

pub struct SelectorNoVendorPrefix {
    selector: String,
}

/// ## What it does
///
/// Checks for pseudo-classes and pseudo-elements written with a vendor
/// prefix, such as `::-moz-selection` or `:-webkit-any-link`.
///
/// ## Why is this bad?
///
/// Prefixed selectors only match in one engine. Prefixes, when still
/// needed, are better added by a build step.
///
/// ## Example
///
/// ```css
/// input::-moz-placeholder { color: gray; }
/// ```
///
/// Use instead:
/// ```css
/// input::placeholder { color: gray; }
/// ```
impl Violation for SelectorNoVendorPrefix {
    fn rule(&self) -> Rule {
        Rule::SelectorNoVendorPrefix
    }
    fn body(&self) -> String {
        format!("Unexpected vendor-prefix \"{}\"", self.selector)
    }
}

/// `pseudo` is a `pseudo_class_selector` or a `pseudo_element_selector`.
pub fn selector_no_vendor_prefix(pseudo: Node, text: &str) -> anyhow::Result<Option<Diagnostic>> {
    // The selector the pseudo-class applies to, if any, comes before the
    // colon.
    let mut cursor = pseudo.walk();
    let Some(colon) = pseudo
        .children(&mut cursor)
        .find(|child| !child.is_named() && matches!(child.kind(), ":" | "::"))
    else {
        return Ok(None);
    };
    let Some(name) = colon.next_sibling() else {
        return Ok(None);
    };

    if !has_vendor_prefix(&text[name.byte_range()]) {
        return Ok(None);
    }

    let range = colon.start_byte()..name.end_byte();
    let diagnostic = Diagnostic::new(
        SelectorNoVendorPrefix { selector: text[range.clone()].to_string() },
        range,
        None,
    );
    Ok(Some(diagnostic))
}
