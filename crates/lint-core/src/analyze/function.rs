use tree_sitter::Node;

use crate::check::FileChecker;
use crate::lints::no_func_keyword::no_func_keyword::no_func_keyword;
use crate::rule_set::Rule;

pub fn function(node: Node, checker: &mut FileChecker) -> anyhow::Result<()> {
    if checker.is_rule_enabled(Rule::NoFuncKeyword) {
        checker.report_diagnostic(no_func_keyword(node)?);
    }
    Ok(())
}
