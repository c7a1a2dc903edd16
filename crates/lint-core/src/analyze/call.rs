use tree_sitter::Node;

use crate::check::FileChecker;
use crate::lints::no_eval::no_eval::no_eval;
use crate::rule_set::Rule;

pub fn call(node: Node, checker: &mut FileChecker) -> anyhow::Result<()> {
    if checker.is_rule_enabled(Rule::NoEval) {
        checker.report_diagnostic(no_eval(node, checker.text())?);
    }
    Ok(())
}
