pub(crate) mod no_empty;

#[cfg(test)]
mod tests {
    use crate::utils_test::*;

    #[test]
    fn test_lint_no_empty() {
        let expected_message = "Empty block statement.";

        expect_lint("if (a) {}", expected_message, "no-empty", "js");
        expect_lint("if (a) { b() } else {}", expected_message, "no-empty", "js");
        expect_lint("while (a) {}", expected_message, "no-empty", "js");
        expect_lint("try { a() } catch (e) {}", expected_message, "no-empty", "js");
        expect_lint("try { a() } finally {}", expected_message, "no-empty", "js");
        expect_lint("switch (a) {}", "Empty switch statement.", "no-empty", "js");
    }

    #[test]
    fn test_no_lint_no_empty() {
        expect_no_lint("if (a) { b() }", "no-empty", "js");
        expect_no_lint("if (a) {\n  // nothing to do\n}", "no-empty", "js");
        expect_no_lint("try { a() } catch (e) { /* ignore */ }", "no-empty", "js");
        expect_no_lint("function f() {}", "no-empty", "js");
        expect_no_lint("const f = () => {}", "no-empty", "js");
        expect_no_lint("const f = function () {}", "no-empty", "js");
        expect_no_lint("class A { m() {} }", "no-empty", "js");
        expect_no_lint("const o = {}", "no-empty", "js");
        expect_no_lint("switch (a) { case 1: break }", "no-empty", "js");
    }

    #[test]
    fn test_no_empty_highlight() {
        expect_diagnostic_highlight("if (a) {}", "no-empty", "js", "{}");
    }
}
