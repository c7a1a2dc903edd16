use tree_sitter::Node;

use crate::diagnostic::*;
use crate::preset::Quote;
use crate::rule_set::Rule;

pub struct StringQuotes {
    expected: Quote,
}

/// ## What it does
///
/// Checks that strings are delimited by the preferred quotes (single quotes
/// by default).
///
/// Strings containing the preferred quote character are left alone, since
/// switching their delimiters would require escaping.
///
/// ## Example
///
/// ```css
/// a::before { content: "x"; }
/// ```
///
/// Use instead:
/// ```css
/// a::before { content: 'x'; }
/// ```
impl Violation for StringQuotes {
    fn rule(&self) -> Rule {
        Rule::StringQuotes
    }
    fn body(&self) -> String {
        format!("Expected {} quotes", self.expected.name())
    }
}

pub fn string_quotes(node: Node, text: &str, expected: Quote) -> anyhow::Result<Option<Diagnostic>> {
    let range = node.byte_range();
    let raw = &text[range.clone()];

    let Some(delimiter) = raw.chars().next() else {
        return Ok(None);
    };
    if delimiter != expected.other().as_char() || raw.len() < 2 || !raw.ends_with(delimiter) {
        return Ok(None);
    }

    let inner = &raw[1..raw.len() - 1];
    if inner.contains(expected.as_char()) {
        return Ok(None);
    }

    let unescaped = inner.replace(&format!("\\{delimiter}"), &delimiter.to_string());
    let quote = expected.as_char();
    let diagnostic = Diagnostic::new(
        StringQuotes { expected },
        range.clone(),
        Some(Fix::replace(range, format!("{quote}{unescaped}{quote}"))),
    );
    Ok(Some(diagnostic))
}
