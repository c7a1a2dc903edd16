use tree_sitter::{Node, Parser};

use crate::document::{grammar, new_parser};
use crate::error::SelectorError;
use crate::rule_set::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
    /// `a + b`
    NextSibling,
    /// `a ~ b`
    SubsequentSibling,
}

/// One component of a selector, e.g. `a`, `.active`, `:hover` or `>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorComponent {
    Type(String),
    Universal,
    Class(String),
    Id(String),
    Attribute(String),
    PseudoClass(String),
    PseudoElement(String),
    Nesting,
    Combinator(Combinator),
}

impl SelectorComponent {
    /// Pseudo-classes and pseudo-elements describe a state of the element
    /// (`:hover`, `:focus`, `:nth-child(2)`, `::before`...).
    pub fn is_state(&self) -> bool {
        matches!(self, Self::PseudoClass(_) | Self::PseudoElement(_))
    }
}

/// Parses selectors on their own, outside of any stylesheet.
pub struct SelectorParser {
    parser: Parser,
}

impl SelectorParser {
    pub fn new() -> anyhow::Result<Self> {
        let parser = new_parser(&grammar(Language::Style), Language::Style.as_str())?;
        Ok(Self { parser })
    }

    /// Split `selector` into its components, in source order.
    pub fn parse(&mut self, selector: &str) -> Result<Vec<SelectorComponent>, SelectorError> {
        let error = || SelectorError { selector: selector.to_string() };

        if selector.trim().is_empty() || selector.contains(['{', '}']) {
            return Err(error());
        }

        let text = format!("{selector} {{}}");
        let tree = self.parser.parse(&text, None).ok_or_else(error)?;
        let root = tree.root_node();
        if root.has_error() || root.named_child_count() != 1 {
            return Err(error());
        }

        let selectors = root
            .named_child(0)
            .filter(|rule| rule.kind() == "rule_set")
            .and_then(|rule| rule.named_child(0))
            .filter(|selectors| selectors.kind() == "selectors")
            .ok_or_else(error)?;

        let mut components = Vec::new();
        let mut cursor = selectors.walk();
        for node in selectors.named_children(&mut cursor) {
            collect_components(node, &text, &mut components);
        }
        Ok(components)
    }

    /// Whether `selector` has at least one pseudo-class or pseudo-element.
    pub fn is_state_qualified(&mut self, selector: &str) -> Result<bool, SelectorError> {
        Ok(self.parse(selector)?.iter().any(SelectorComponent::is_state))
    }

    /// Whether every selector of the list is state-qualified. Such selectors
    /// apply to mutually exclusive states of an element, so repeating a
    /// declaration under each of them is not redundant. An empty list is
    /// never state-qualified.
    pub fn is_all_state_qualified<S: AsRef<str>>(
        &mut self,
        selectors: &[S],
    ) -> Result<bool, SelectorError> {
        if selectors.is_empty() {
            return Ok(false);
        }
        // Every selector is parsed, even after a non-qualified one, so that a
        // malformed selector is never silently accepted.
        let mut all_qualified = true;
        for selector in selectors {
            all_qualified &= self.is_state_qualified(selector.as_ref())?;
        }
        Ok(all_qualified)
    }
}

/// Convenience wrapper around [SelectorParser::is_all_state_qualified].
pub fn is_all_state_qualified<S: AsRef<str>>(selectors: &[S]) -> anyhow::Result<bool> {
    Ok(SelectorParser::new()?.is_all_state_qualified(selectors)?)
}

fn collect_components(node: Node, text: &str, components: &mut Vec<SelectorComponent>) {
    let combinator = match node.kind() {
        "descendant_selector" => Some(Combinator::Descendant),
        "child_selector" => Some(Combinator::Child),
        "adjacent_sibling_selector" => Some(Combinator::NextSibling),
        "sibling_selector" => Some(Combinator::SubsequentSibling),
        _ => None,
    };

    if let Some(combinator) = combinator {
        let mut cursor = node.walk();
        let operands: Vec<Node> = node.named_children(&mut cursor).collect();
        if let Some((left, right)) = operands.split_first() {
            collect_components(*left, text, components);
            components.push(SelectorComponent::Combinator(combinator));
            for operand in right {
                collect_components(*operand, text, components);
            }
        }
        return;
    }

    // Compound selectors such as `a.active:hover` nest their base selector
    // in front of the sigil (`.`, `#`, `:`, `::`, `[`), and the name after it.
    let mut base = Vec::new();
    let mut name = None;
    let mut seen_sigil = false;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if !child.is_named() {
            seen_sigil = true;
            continue;
        }
        if !seen_sigil {
            base.push(child);
        } else if name.is_none() {
            name = Some(text[child.byte_range()].to_string());
        }
    }
    let name = name.unwrap_or_default();

    let component = match node.kind() {
        "tag_name" | "nesting_selector" | "universal_selector" | "namespace_selector" => {
            // Leaves: nothing nested.
            base.clear();
            match node.kind() {
                "tag_name" => Some(SelectorComponent::Type(text[node.byte_range()].to_string())),
                "nesting_selector" => Some(SelectorComponent::Nesting),
                "universal_selector" => Some(SelectorComponent::Universal),
                _ => Some(SelectorComponent::Type(text[node.byte_range()].to_string())),
            }
        }
        "class_selector" => Some(SelectorComponent::Class(name)),
        "id_selector" => Some(SelectorComponent::Id(name)),
        "attribute_selector" => Some(SelectorComponent::Attribute(name)),
        "pseudo_class_selector" => Some(SelectorComponent::PseudoClass(name)),
        "pseudo_element_selector" => Some(SelectorComponent::PseudoElement(name)),
        _ => None,
    };

    for child in base {
        collect_components(child, text, components);
    }
    if let Some(component) = component {
        components.push(component);
    }
}
