use tree_sitter::Node;

use crate::check::FileChecker;
use crate::lints::no_empty::no_empty::no_empty;
use crate::rule_set::Rule;

pub fn block(node: Node, checker: &mut FileChecker) -> anyhow::Result<()> {
    if checker.is_rule_enabled(Rule::NoEmpty) {
        checker.report_diagnostic(no_empty(node)?);
    }
    Ok(())
}
