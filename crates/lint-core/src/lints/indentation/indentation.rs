use tree_sitter::Node;

use crate::diagnostic::*;
use crate::document::Document;
use crate::rule_set::Rule;

pub struct Indentation {
    expected: usize,
}

/// ## What it does
///
/// Checks that statements, declarations and closing braces starting a line
/// are indented by a fixed number of spaces per nesting level (2 by
/// default).
///
/// ## Why is this bad?
///
/// Inconsistent indentation hides the nesting of rules, in particular
/// inside `@media` and `@supports` blocks.
///
/// In `<style>` elements, the indentation of the first line of the element
/// is the base indentation of the whole element.
///
/// ## Example
///
/// ```css
/// a {
///     color: red;
///   }
/// ```
///
/// Use instead:
/// ```css
/// a {
///   color: red;
/// }
/// ```
impl Violation for Indentation {
    fn rule(&self) -> Rule {
        Rule::Indentation
    }
    fn body(&self) -> String {
        format!("Expected indentation of {} spaces", self.expected)
    }
}

/// `node` is nested in `depth` blocks.
pub fn indentation(
    node: Node,
    depth: usize,
    document: &Document,
    spaces: usize,
) -> anyhow::Result<Option<Diagnostic>> {
    let text = &document.text;
    let start = node.start_byte();
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    let indent = &text[line_start..start];

    // Only nodes starting a line are checked.
    if !indent.chars().all(|c| c == ' ' || c == '\t') {
        return Ok(None);
    }
    if !document.contains(line_start, start) {
        return Ok(None);
    }

    let expected = document.base_indent(start) + depth * spaces;
    if indent.len() == expected && !indent.contains('\t') {
        return Ok(None);
    }

    let line_end = text[start..].find('\n').map_or(text.len(), |i| start + i);
    let range = start..node.end_byte().min(line_end);

    let diagnostic = Diagnostic::new(
        Indentation { expected },
        range,
        Some(Fix::replace(line_start..start, " ".repeat(expected))),
    );
    Ok(Some(diagnostic))
}
