use anyhow::{Context, Result};
use tree_sitter::{Node, Tree};

use crate::check::FileChecker;
use crate::error::ParseError;
use crate::lints::at_rule_no_vendor_prefix::at_rule_no_vendor_prefix::at_rule_no_vendor_prefix;
use crate::lints::indentation::indentation::indentation;
use crate::lints::media_feature_name_no_vendor_prefix::media_feature_name_no_vendor_prefix::media_feature_name_no_vendor_prefix;
use crate::lints::no_duplicate_declarations::detect;
use crate::lints::property_no_vendor_prefix::property_no_vendor_prefix::property_no_vendor_prefix;
use crate::lints::selector_no_vendor_prefix::selector_no_vendor_prefix::selector_no_vendor_prefix;
use crate::lints::string_quotes::string_quotes::string_quotes;
use crate::lints::value_no_vendor_prefix::value_no_vendor_prefix::value_no_vendor_prefix;
use crate::rule_set::Rule;
use crate::style_tree;
use crate::utils_style::descendants_of_kind;

/// Run the style rules on a parsed stylesheet.
///
/// `no-duplicate-declarations` works on the typed style tree of the whole
/// document. The other rules are dispatched node by node.
pub fn check_stylesheet(tree: &Tree, checker: &mut FileChecker) -> Result<()> {
    let root = tree.root_node();

    let enabled = checker.is_rule_enabled(Rule::NoDuplicateDeclarations);
    if enabled {
        let nodes = style_tree::build(root, checker.text());
        let findings = detect(&nodes, enabled).with_context(|| ParseError {
            filename: checker.document.path.clone(),
        })?;
        for finding in findings {
            checker.report_diagnostic(Some(finding.into_diagnostic()));
        }
    }

    check_container(root, 0, checker)
}

// Statements of a stylesheet or of a block are nested in `depth` blocks. The
// closing brace of a block is at the depth of the statement owning it.
fn check_container(container: Node, depth: usize, checker: &mut FileChecker) -> Result<()> {
    let mut cursor = container.walk();
    for child in container.children(&mut cursor) {
        if child.is_named() {
            check_statement(child, depth, checker)?;
        } else if child.kind() == "}" && depth > 0 {
            check_indentation(child, depth - 1, checker)?;
        }
    }
    Ok(())
}

fn check_statement(node: Node, depth: usize, checker: &mut FileChecker) -> Result<()> {
    check_indentation(node, depth, checker)?;

    check_vendor_prefixes(node, checker)?;

    if checker.is_rule_enabled(Rule::StringQuotes) {
        check_strings(node, checker)?;
    }

    // `@keyframes` hold a list of `from { ... }` blocks
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if matches!(child.kind(), "block" | "keyframe_block_list") {
            check_container(child, depth + 1, checker)?;
        }
    }
    Ok(())
}

fn check_vendor_prefixes(node: Node, checker: &mut FileChecker) -> Result<()> {
    let text = checker.text();
    match node.kind() {
        "declaration" => {
            if checker.is_rule_enabled(Rule::PropertyNoVendorPrefix) {
                checker.report_diagnostic(property_no_vendor_prefix(node, text)?);
            }
            if checker.is_rule_enabled(Rule::ValueNoVendorPrefix) {
                for value in descendants_of_kind(node, &["plain_value", "function_name"]) {
                    checker.report_diagnostic(value_no_vendor_prefix(value, text)?);
                }
            }
        }
        "rule_set" => {
            if checker.is_rule_enabled(Rule::SelectorNoVendorPrefix) {
                let pseudos = ["pseudo_class_selector", "pseudo_element_selector"];
                for pseudo in descendants_of_kind(node, &pseudos) {
                    checker.report_diagnostic(selector_no_vendor_prefix(pseudo, text)?);
                }
            }
        }
        "media_statement" => {
            if checker.is_rule_enabled(Rule::MediaFeatureNameNoVendorPrefix) {
                for feature in descendants_of_kind(node, &["feature_name"]) {
                    checker.report_diagnostic(media_feature_name_no_vendor_prefix(feature, text)?);
                }
            }
        }
        _ => {}
    }

    // `@-webkit-keyframes` is a keyframes statement, other prefixed
    // at-rules are generic ones.
    if checker.is_rule_enabled(Rule::AtRuleNoVendorPrefix) {
        if let Some(at_keyword) = node.child(0).filter(|child| child.kind() == "at_keyword") {
            checker.report_diagnostic(at_rule_no_vendor_prefix(at_keyword, text)?);
        }
    }
    Ok(())
}

fn check_indentation(node: Node, depth: usize, checker: &mut FileChecker) -> Result<()> {
    if checker.is_rule_enabled(Rule::Indentation) {
        let spaces = checker.options.indent_spaces;
        checker.report_diagnostic(indentation(node, depth, checker.document, spaces)?);
    }
    Ok(())
}

// Strings of the statement itself. Those of nested statements are checked
// when these are visited.
fn check_strings(node: Node, checker: &mut FileChecker) -> Result<()> {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "block" | "keyframe_block_list" | "keyframe_block" => {}
            "string_value" => {
                let quote = checker.options.quote;
                checker.report_diagnostic(string_quotes(child, checker.text(), quote)?);
            }
            _ => check_strings(child, checker)?,
        }
    }
    Ok(())
}
