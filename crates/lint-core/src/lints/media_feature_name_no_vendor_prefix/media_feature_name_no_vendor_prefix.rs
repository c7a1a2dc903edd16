use tree_sitter::Node;

use crate::diagnostic::*;
use crate::rule_set::Rule;
use crate::utils_style::has_vendor_prefix;

pub struct MediaFeatureNameNoVendorPrefix {
    feature: String,
}

/// ## What it does
///
/// Checks for media features written with a vendor prefix, such as
/// `-webkit-min-device-pixel-ratio`.
///
/// ## Example
///
/// ```css
/// @media (-webkit-min-device-pixel-ratio: 2) { a { color: red; } }
/// ```
///
/// Use instead:
/// ```css
/// @media (min-resolution: 2dppx) { a { color: red; } }
/// ```
impl Violation for MediaFeatureNameNoVendorPrefix {
    fn rule(&self) -> Rule {
        Rule::MediaFeatureNameNoVendorPrefix
    }
    fn body(&self) -> String {
        format!("Unexpected vendor-prefix \"{}\"", self.feature)
    }
}

/// `feature_name` is the name of a feature in the query of `@media`.
pub fn media_feature_name_no_vendor_prefix(
    feature_name: Node,
    text: &str,
) -> anyhow::Result<Option<Diagnostic>> {
    let feature = &text[feature_name.byte_range()];
    if !has_vendor_prefix(feature) {
        return Ok(None);
    }

    let diagnostic = Diagnostic::new(
        MediaFeatureNameNoVendorPrefix { feature: feature.to_string() },
        feature_name.byte_range(),
        None,
    );
    Ok(Some(diagnostic))
}
