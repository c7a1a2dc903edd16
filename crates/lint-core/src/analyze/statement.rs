use tree_sitter::Node;

use crate::check::FileChecker;
use crate::lints::no_debugger::no_debugger::no_debugger;
use crate::lints::no_with::no_with::no_with;
use crate::lints::semi::semi::semi;
use crate::rule_set::Rule;

pub fn statement(node: Node, checker: &mut FileChecker) -> anyhow::Result<()> {
    match node.kind() {
        "debugger_statement" if checker.is_rule_enabled(Rule::NoDebugger) => {
            checker.report_diagnostic(no_debugger(node)?);
        }
        "with_statement" if checker.is_rule_enabled(Rule::NoWith) => {
            checker.report_diagnostic(no_with(node)?);
        }
        _ => {}
    }
    if node.kind() != "with_statement" && checker.is_rule_enabled(Rule::Semi) {
        checker.report_diagnostic(semi(node, checker.text())?);
    }
    Ok(())
}
