//! A typed view of a parsed stylesheet.
//!
//! The tree-sitter tree distinguishes dozens of node kinds. Rules that only
//! care about which declarations live under which selectors work on this
//! smaller tree instead, where every node is an at-rule, a style rule or a
//! declaration, in document order.

use std::ops::Range;

use tree_sitter::Node;

use crate::location::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleNode {
    AtRule(AtRule),
    Rule(StyleRule),
    Declaration(Declaration),
}

/// A block introduced by an at-keyword (`@media`, `@supports`,
/// `@font-face`...) or a keyframe block. It has no selector of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    pub name: String,
    pub children: Vec<StyleNode>,
}

/// A block qualified by a list of selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// Raw text of each comma-separated selector
    pub selectors: Vec<String>,
    /// Declarations and nested blocks, in document order
    pub items: Vec<StyleNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    /// The value as written, without the `!important` flag.
    pub value: String,
    pub range: Range<usize>,
    pub location: Location,
}

impl Declaration {
    /// The `property: value` text two declarations must share to be
    /// duplicates of each other.
    pub fn key(&self) -> String {
        format!("{}: {}", self.property, self.value)
    }
}

/// Build the typed tree of the stylesheet rooted at `root`.
pub fn build(root: Node, text: &str) -> Vec<StyleNode> {
    build_items(root, text)
}

fn build_items(container: Node, text: &str) -> Vec<StyleNode> {
    let mut items = Vec::new();
    let mut cursor = container.walk();

    for child in container.named_children(&mut cursor) {
        match child.kind() {
            "declaration" => {
                if let Some(declaration) = build_declaration(child, text) {
                    items.push(StyleNode::Declaration(declaration));
                }
            }
            "rule_set" => items.push(StyleNode::Rule(build_rule(child, text))),
            "keyframes_statement" => items.push(StyleNode::AtRule(build_keyframes(child, text))),
            "comment" | "js_comment" => {}
            _ => {
                // Every other statement is an at-rule. Those without a block
                // (`@import`, `@charset`...) hold no declarations.
                if let Some(block) = child_of_kind(child, "block") {
                    items.push(StyleNode::AtRule(AtRule {
                        name: at_keyword(child, text),
                        children: build_items(block, text),
                    }));
                }
            }
        }
    }

    items
}

fn build_rule(node: Node, text: &str) -> StyleRule {
    let selectors = child_of_kind(node, "selectors")
        .map(|selectors| {
            let mut cursor = selectors.walk();
            selectors
                .named_children(&mut cursor)
                .filter(|selector| !matches!(selector.kind(), "comment" | "js_comment"))
                .map(|selector| text[selector.byte_range()].trim().to_string())
                .collect()
        })
        .unwrap_or_default();

    let items = child_of_kind(node, "block")
        .map(|block| build_items(block, text))
        .unwrap_or_default();

    StyleRule { selectors, items }
}

fn build_keyframes(node: Node, text: &str) -> AtRule {
    let mut children = Vec::new();

    if let Some(list) = child_of_kind(node, "keyframe_block_list") {
        let mut cursor = list.walk();
        for keyframe in list.named_children(&mut cursor) {
            if keyframe.kind() != "keyframe_block" {
                continue;
            }
            let name = keyframe
                .named_child(0)
                .map(|offset| text[offset.byte_range()].to_string())
                .unwrap_or_default();
            let items = child_of_kind(keyframe, "block")
                .map(|block| build_items(block, text))
                .unwrap_or_default();
            children.push(StyleNode::AtRule(AtRule { name, children: items }));
        }
    }

    AtRule { name: at_keyword(node, text), children }
}

fn build_declaration(node: Node, text: &str) -> Option<Declaration> {
    let property = child_of_kind(node, "property_name")?;

    let mut value: Option<Range<usize>> = None;
    let mut after_colon = false;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if !after_colon {
            after_colon = child.kind() == ":";
            continue;
        }
        if !child.is_named() || matches!(child.kind(), "important" | "comment" | "js_comment") {
            continue;
        }
        let range = child.byte_range();
        value = Some(match value {
            Some(value) => value.start..range.end,
            None => range,
        });
    }

    // The range stops before the terminating `;`.
    let mut end = property.end_byte();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() != ";" {
            end = end.max(child.end_byte());
        }
    }

    let range = node.start_byte()..end;
    Some(Declaration {
        property: text[property.byte_range()].to_string(),
        value: value.map(|value| text[value].trim().to_string()).unwrap_or_default(),
        location: Location::from_offset(text, range.start),
        range,
    })
}

fn child_of_kind<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).find(|child| child.kind() == kind)
}

fn at_keyword(node: Node, text: &str) -> String {
    node.child(0)
        .map(|keyword| text[keyword.byte_range()].to_string())
        .unwrap_or_default()
}
