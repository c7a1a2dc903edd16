use tree_sitter::Node;

use crate::check::FileChecker;
use crate::lints::eqeqeq::eqeqeq::eqeqeq;
use crate::lints::use_isnan::use_isnan::use_isnan;
use crate::rule_set::Rule;

pub fn binary_expression(node: Node, checker: &mut FileChecker) -> anyhow::Result<()> {
    if checker.is_rule_enabled(Rule::Eqeqeq) {
        checker.report_diagnostic(eqeqeq(node)?);
    }
    if checker.is_rule_enabled(Rule::UseIsnan) {
        checker.report_diagnostic(use_isnan(node, checker.text())?);
    }
    Ok(())
}
