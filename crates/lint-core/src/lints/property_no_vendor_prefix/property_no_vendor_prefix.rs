use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;
use crate::utils_style::has_vendor_prefix;

pub struct PropertyNoVendorPrefix {
    property: String,
}

/// ## What it does
///
/// Checks for properties written with a vendor prefix.
///
/// ## Why is this bad?
///
/// Prefixed properties are leftovers from the time browsers shipped
/// experimental features under their own names. Adding prefixes is better
/// left to a build step.
///
/// ## Example
///
/// ```css
/// a { -webkit-transition: none; }
/// ```
///
/// Use instead:
/// ```css
/// a { transition: none; }
/// ```
impl Violation for PropertyNoVendorPrefix {
    fn rule(&self) -> Rule {
        Rule::PropertyNoVendorPrefix
    }
    fn body(&self) -> String {
        format!("Unexpected vendor-prefix \"{}\"", self.property)
    }
}

pub fn property_no_vendor_prefix(
    declaration: Node,
    text: &str,
) -> anyhow::Result<Option<Diagnostic>> {
    let Some(property) = declaration.child(0).filter(|n| n.kind() == "property_name") else {
        return Ok(None);
    };

    let name = &text[property.byte_range()];
    if !has_vendor_prefix(name) {
        return Ok(None);
    }

    let diagnostic = Diagnostic::new(
        PropertyNoVendorPrefix { property: name.to_string() },
        property.byte_range(),
        None,
    );
    Ok(Some(diagnostic))
}
