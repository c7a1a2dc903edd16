use rustc_hash::FxHashSet;

use crate::diagnostic::*;
use crate::error::SelectorError;
use crate::rule_set::Rule;
use crate::style_tree::{Declaration, StyleNode, StyleRule};

use super::selector::SelectorParser;

pub struct NoDuplicateDeclarations {
    key: String,
}

/// ## What it does
///
/// Checks for declarations repeating a `property: value` pair that was
/// already declared earlier in the same stylesheet.
///
/// ## Why is this bad?
///
/// A repeated declaration has no effect when both selectors match the same
/// elements at the same time. It is usually left over from copy-pasting or
/// from a refactoring.
///
/// Repeats under selectors that are all qualified by a pseudo-class or a
/// pseudo-element (`:hover`, `:focus`, `::before`...) are allowed, since
/// these describe mutually exclusive states of an element.
///
/// ## Example
///
/// ```css
/// a { color: red; }
/// a.active { color: red; }
/// ```
///
/// Allowed:
/// ```css
/// a:hover { color: red; }
/// a:focus { color: red; }
/// ```
impl Violation for NoDuplicateDeclarations {
    fn rule(&self) -> Rule {
        Rule::NoDuplicateDeclarations
    }
    fn body(&self) -> String {
        format!("Expected no duplicate declarations. Found {}", self.key)
    }
}

/// Every `property: value` pair seen so far in one stylesheet.
#[derive(Debug, Default)]
pub struct SeenSet(FxHashSet<String>);

impl SeenSet {
    /// Record `key`, returning whether it was seen before.
    pub fn insert(&mut self, key: String) -> bool {
        !self.0.insert(key)
    }
}

/// A repeated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub message: String,
    pub declaration: Declaration,
    pub rule: Rule,
}

impl Finding {
    fn new(declaration: &Declaration) -> Self {
        let violation = NoDuplicateDeclarations { key: declaration.key() };
        Self {
            message: violation.body(),
            declaration: declaration.clone(),
            rule: violation.rule(),
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::new(
            ViolationData::new(self.rule, self.message),
            self.declaration.range,
            None,
        )
    }
}

/// Find every declaration repeating an earlier one, in document order.
///
/// A malformed selector fails the whole stylesheet: no findings are
/// returned rather than an incomplete list.
pub fn detect(document: &[StyleNode], enabled: bool) -> anyhow::Result<Vec<Finding>> {
    if !enabled {
        return Ok(Vec::new());
    }

    let mut visitor = DuplicateVisitor {
        selectors: SelectorParser::new()?,
        seen: SeenSet::default(),
        findings: Vec::new(),
    };
    visitor.visit_items(document, None)?;
    Ok(visitor.findings)
}

struct DuplicateVisitor {
    selectors: SelectorParser,
    seen: SeenSet,
    findings: Vec<Finding>,
}

impl DuplicateVisitor {
    /// `owner` is the style rule the items are directly declared in, `None`
    /// at the top level and directly inside at-rules.
    fn visit_items(
        &mut self,
        items: &[StyleNode],
        owner: Option<(&StyleRule, bool)>,
    ) -> Result<(), SelectorError> {
        for item in items {
            match item {
                StyleNode::AtRule(at_rule) => self.visit_items(&at_rule.children, None)?,
                StyleNode::Rule(rule) => {
                    let excused = self.selectors.is_all_state_qualified(&rule.selectors)?;
                    self.visit_items(&rule.items, Some((rule, excused)))?;
                }
                StyleNode::Declaration(declaration) => {
                    let Some((rule, excused)) = owner else {
                        continue;
                    };
                    let seen = self.seen.insert(declaration.key());
                    if seen && !excused {
                        tracing::trace!(
                            "Repeated `{}` under `{}`",
                            declaration.key(),
                            rule.selectors.join(", ")
                        );
                        self.findings.push(Finding::new(declaration));
                    }
                }
            }
        }
        Ok(())
    }
}
