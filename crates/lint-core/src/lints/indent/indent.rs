use rustc_hash::FxHashMap;
use tree_sitter::Node;

use crate::diagnostic::*;
use crate::document::Document;
use crate::rule_set::Rule;

/// Nodes whose elements are indented one level deeper than the line the node
/// opens on. Their closing delimiter goes back to that line's indentation.
const CONTAINERS: &[&str] = &[
    "statement_block",
    "class_body",
    "object",
    "object_pattern",
    "array",
    "array_pattern",
    "arguments",
    "formal_parameters",
    "switch_body",
    "named_imports",
    "export_clause",
];

const CLOSING_DELIMITERS: &[&str] = &["}", "]", ")"];

/// Lines starting inside these are left alone.
const LITERALS: &[&str] = &["string", "template_string", "regex", "comment"];

pub struct Indent {
    expected: usize,
    found: String,
}

/// ## What it does
///
/// Checks the indentation of the lines starting a statement, an element of
/// an array, object, argument or parameter list, a `case` clause, a member
/// access (`.then()`) or a closing bracket. Each nesting level adds a fixed
/// number of spaces. `case` clauses are nested in their `switch` by a
/// configurable number of levels.
///
/// Other continuation lines, such as the operands of a long condition, are
/// not checked.
///
/// ## Why is this bad?
///
/// Indentation that doesn't follow the nesting hides the structure of the
/// code.
///
/// ## Example
///
/// ```js
/// if (a) {
///     b()
///   }
/// ```
///
/// Use instead:
/// ```js
/// if (a) {
///   b()
/// }
/// ```
impl Violation for Indent {
    fn rule(&self) -> Rule {
        Rule::Indent
    }
    fn body(&self) -> String {
        let unit = if self.expected == 1 { "space" } else { "spaces" };
        format!(
            "Expected indentation of {} {unit} but found {}.",
            self.expected, self.found
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IndentOptions {
    pub spaces: usize,
    /// Levels of `case` clauses in a `switch` body
    pub switch_case: usize,
}

/// Check every line of the script. Lines are visited in order, so the
/// expected indentation of a line only depends on lines above it.
pub fn indent(
    root: Node,
    document: &Document,
    options: IndentOptions,
) -> anyhow::Result<Vec<Diagnostic>> {
    let mut lines = Lines::new(&document.text);
    let mut diagnostics = Vec::new();

    for row in 0..lines.starts.len() {
        let line_start = lines.starts[row];
        let line = lines.line(row);
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        if line[indent..].trim().is_empty() {
            continue;
        }

        let start = line_start + indent;
        if !document.contains(line_start, start) {
            continue;
        }
        let Some(token) = root.descendant_for_byte_range(start, start + 1) else {
            continue;
        };
        if token.start_byte() != start || token.kind() == "comment" || in_literal(token) {
            continue;
        }

        let Some(expected) = expected_indent(token, document, &lines, options) else {
            continue;
        };
        lines.expected.insert(row, expected);

        let actual = &line[..indent];
        if actual.len() == expected && !actual.contains('\t') {
            continue;
        }

        let line_end = line_start + line.len();
        let diagnostic = Diagnostic::new(
            Indent { expected, found: describe(actual) },
            start..token.end_byte().min(line_end),
            Some(Fix::replace(line_start..start, " ".repeat(expected))),
        );
        diagnostics.push(diagnostic);
    }

    Ok(diagnostics)
}

struct Lines<'a> {
    text: &'a str,
    starts: Vec<usize>,
    /// Expected indentation of the checked lines seen so far
    expected: FxHashMap<usize, usize>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, starts, expected: FxHashMap::default() }
    }

    fn line(&self, row: usize) -> &'a str {
        let start = self.starts[row];
        let end = self.starts.get(row + 1).map_or(self.text.len(), |next| next - 1);
        &self.text[start..end]
    }

    /// Indentation the line is expected to have once fixed, or its actual
    /// indentation when it isn't checked.
    fn indent_of(&self, row: usize) -> usize {
        if let Some(expected) = self.expected.get(&row) {
            return *expected;
        }
        let line = self.line(row);
        line.len() - line.trim_start_matches([' ', '\t']).len()
    }
}

fn expected_indent(
    token: Node,
    document: &Document,
    lines: &Lines,
    options: IndentOptions,
) -> Option<usize> {
    let start = token.start_byte();
    let level = options.spaces;

    // The largest node the line starts with
    let mut node = token;
    while let Some(parent) = node.parent() {
        if parent.start_byte() != start || parent.kind() == "program" {
            break;
        }
        node = parent;
    }

    let parent = node.parent()?;
    let opener = lines.indent_of(parent.start_position().row);

    if CLOSING_DELIMITERS.contains(&node.kind()) {
        let closes_parent = CONTAINERS.contains(&parent.kind())
            && parent.child(parent.child_count().saturating_sub(1)) == Some(node);
        return closes_parent.then_some(opener);
    }

    match parent.kind() {
        "program" => Some(document.base_indent(start)),
        "switch_body" => Some(opener + options.switch_case * level),
        // The statements of a clause, not the `case` keyword itself
        "switch_case" | "switch_default" => Some(opener + level),
        kind if CONTAINERS.contains(&kind) => Some(opener + level),
        "member_expression" if matches!(node.kind(), "." | "optional_chain") => {
            Some(opener + level)
        }
        _ if is_unbraced_body(parent, node) => Some(opener + level),
        _ => None,
    }
}

/// `if (a)\n  b()` and the like
fn is_unbraced_body(parent: Node, node: Node) -> bool {
    if node.kind() == "statement_block" {
        return false;
    }
    match parent.kind() {
        "if_statement" => parent.child_by_field_name("consequence") == Some(node),
        "else_clause" => node.kind() != "else",
        "for_statement" | "for_in_statement" | "while_statement" | "do_statement" => {
            parent.child_by_field_name("body") == Some(node)
        }
        _ => false,
    }
}

fn in_literal(token: Node) -> bool {
    let start = token.start_byte();
    let mut current = token.parent();
    while let Some(node) = current {
        if node.start_byte() < start && LITERALS.contains(&node.kind()) {
            return true;
        }
        current = node.parent();
    }
    false
}

fn describe(indent: &str) -> String {
    let spaces = indent.chars().filter(|c| *c == ' ').count();
    let tabs = indent.chars().filter(|c| *c == '\t').count();
    if spaces > 0 {
        spaces.to_string()
    } else if tabs > 0 {
        format!("{tabs} {}", if tabs == 1 { "tab" } else { "tabs" })
    } else {
        "0".to_string()
    }
}
