//! Helpers shared by the style rules.

use tree_sitter::Node;

/// Prefixes browsers used for their experimental features.
pub const VENDOR_PREFIXES: &[&str] = &["-webkit-", "-moz-", "-ms-", "-o-"];

/// Returns true if `name` starts with one of the [VENDOR_PREFIXES], in any
/// case.
pub fn has_vendor_prefix(name: &str) -> bool {
    let lowercase = name.to_ascii_lowercase();
    VENDOR_PREFIXES.iter().any(|prefix| lowercase.starts_with(prefix))
}

/// Nodes of one of the `kinds` below `node`, outer ones first. The search
/// doesn't enter blocks, which hold the nested statements.
pub fn descendants_of_kind<'tree>(node: Node<'tree>, kinds: &[&str]) -> Vec<Node<'tree>> {
    let mut found = Vec::new();
    collect(node, kinds, &mut found);
    found
}

fn collect<'tree>(node: Node<'tree>, kinds: &[&str], found: &mut Vec<Node<'tree>>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if matches!(child.kind(), "block" | "keyframe_block_list") {
            continue;
        }
        if kinds.contains(&child.kind()) {
            found.push(child);
        }
        collect(child, kinds, found);
    }
}
