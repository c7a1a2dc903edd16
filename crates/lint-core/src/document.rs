//! Loading and parsing of the files handed to a checker.
//!
//! Stylesheets and scripts are parsed as a whole. Markup files are parsed
//! with the HTML grammar first to find the contents of their `<style>` and
//! `<script>` elements, and these regions are then parsed as one document
//! with the stylesheet or script grammar. Since tree-sitter parses the
//! regions in place, every node keeps its position in the markup file.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tree_sitter::{Node, Parser, Range, Tree};

use crate::error::ParseError;
use crate::fs::has_markup_extension;
use crate::rule_set::Language;

/// Script types that are run as JavaScript by browsers.
const SCRIPT_TYPES: &[&str] = &[
    "module",
    "text/javascript",
    "application/javascript",
    "text/ecmascript",
    "application/ecmascript",
];

pub fn grammar(language: Language) -> tree_sitter::Language {
    match language {
        Language::Style => tree_sitter_css::LANGUAGE.into(),
        Language::Script => tree_sitter_javascript::LANGUAGE.into(),
    }
}

fn markup_grammar() -> tree_sitter::Language {
    tree_sitter_html::LANGUAGE.into()
}

/// Build a parser for `grammar`. This only fails if the grammar was
/// generated for an incompatible version of tree-sitter.
pub fn new_parser(grammar: &tree_sitter::Language, name: &str) -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(grammar)
        .map_err(|err| anyhow!("Failed to load the {name} grammar: {err}"))?;
    Ok(parser)
}

/// A part of a file written in the document's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub range: Range,
    /// Indentation, in spaces, of the top-level statements of the region.
    pub base_indent: usize,
}

#[derive(Debug)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
    pub language: Language,
    /// `None` when the whole file is written in `language`.
    pub regions: Option<Vec<Region>>,
}

impl Document {
    pub fn new(path: &Path, text: String, language: Language) -> Result<Self> {
        let regions = if has_markup_extension(path) {
            Some(embedded_regions(&text, language)?)
        } else {
            None
        };

        Ok(Self { path: path.to_path_buf(), text, language, regions })
    }

    /// Whether there is anything to lint at all. Markup files without any
    /// `<style>` (or `<script>`) element are skipped.
    pub fn is_empty(&self) -> bool {
        self.regions.as_ref().is_some_and(|regions| regions.is_empty())
    }

    /// Indentation of the top-level statements of the region containing the
    /// byte `offset`.
    pub fn base_indent(&self, offset: usize) -> usize {
        let Some(regions) = &self.regions else {
            return 0;
        };
        regions
            .iter()
            .find(|region| region.range.start_byte <= offset && offset <= region.range.end_byte)
            .map_or(0, |region| region.base_indent)
    }

    /// Whether the bytes `start..end` lie in a part of the file written in
    /// the document's language, i.e. whether a fix may rewrite them.
    pub fn contains(&self, start: usize, end: usize) -> bool {
        match &self.regions {
            None => end <= self.text.len(),
            Some(regions) => regions
                .iter()
                .any(|region| region.range.start_byte <= start && end <= region.range.end_byte),
        }
    }

    /// Parse the document. Syntax errors are reported as a [ParseError].
    pub fn parse(&self) -> Result<Tree> {
        let mut parser = new_parser(&grammar(self.language), self.language.as_str())?;

        if let Some(regions) = &self.regions {
            let ranges: Vec<Range> = regions.iter().map(|region| region.range).collect();
            parser.set_included_ranges(&ranges).map_err(|_| {
                anyhow!(
                    "Invalid {} regions in {}",
                    self.language,
                    self.path.display()
                )
            })?;
        }

        let Some(tree) = parser.parse(&self.text, None) else {
            return Err(anyhow!("Parsing of {} was interrupted", self.path.display()));
        };

        if tree.root_node().has_error() {
            return Err(ParseError { filename: self.path.clone() }.into());
        }

        Ok(tree)
    }
}

/// Find the contents of the `<style>` or `<script>` elements of a markup
/// file, in document order.
fn embedded_regions(text: &str, language: Language) -> Result<Vec<Region>> {
    let mut parser = new_parser(&markup_grammar(), "markup")?;
    let Some(tree) = parser.parse(text, None) else {
        return Ok(Vec::new());
    };

    let element_kind = match language {
        Language::Style => "style_element",
        Language::Script => "script_element",
    };

    let mut regions = Vec::new();
    collect_regions(tree.root_node(), text, element_kind, &mut regions);
    Ok(regions)
}

fn collect_regions(node: Node, text: &str, element_kind: &str, regions: &mut Vec<Region>) {
    if node.kind() == element_kind {
        if !is_script_type_supported(node, text) {
            return;
        }
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "raw_text" {
                let range = child.range();
                let base_indent = first_line_indent(&text[range.start_byte..range.end_byte]);
                regions.push(Region { range, base_indent });
            }
        }
        return;
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_regions(child, text, element_kind, regions);
    }
}

/// `<script type="...">` elements may hold templates or data rather than
/// code. `<style>` elements are always stylesheets.
fn is_script_type_supported(element: Node, text: &str) -> bool {
    if element.kind() != "script_element" {
        return true;
    }

    let Some(start_tag) = element.named_child(0).filter(|n| n.kind() == "start_tag") else {
        return true;
    };

    let mut cursor = start_tag.walk();
    for attribute in start_tag.named_children(&mut cursor) {
        if attribute.kind() != "attribute" {
            continue;
        }
        let mut inner = attribute.walk();
        let parts: Vec<Node> = attribute.named_children(&mut inner).collect();
        let Some(name) = parts.first() else {
            continue;
        };
        if !text[name.byte_range()].eq_ignore_ascii_case("type") {
            continue;
        }
        let value = parts
            .get(1)
            .map(|value| text[value.byte_range()].trim_matches(|c| c == '"' || c == '\''))
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        return value.is_empty() || SCRIPT_TYPES.contains(&value.as_str());
    }

    true
}

fn first_line_indent(region: &str) -> usize {
    region
        .lines()
        .find(|line| !line.trim().is_empty())
        .map_or(0, |line| line.len() - line.trim_start_matches(' ').len())
}
