pub(crate) mod at_rule_no_vendor_prefix;

#[cfg(test)]
mod tests {
    use crate::utils_test::*;

    #[test]
    fn test_lint_at_rule_no_vendor_prefix() {
        expect_lint(
            "@-webkit-keyframes spin { from { opacity: 0; } }",
            "Unexpected vendor-prefixed at-rule \"@-webkit-keyframes\"",
            "at-rule-no-vendor-prefix",
            "css",
        );
        expect_lint(
            "@-ms-viewport { width: device-width; }",
            "Unexpected vendor-prefixed at-rule \"@-ms-viewport\"",
            "at-rule-no-vendor-prefix",
            "css",
        );
        expect_lint(
            "@media print {\n  @-webkit-keyframes spin { to { opacity: 1; } }\n}",
            "Unexpected vendor-prefixed at-rule",
            "at-rule-no-vendor-prefix",
            "css",
        );
    }

    #[test]
    fn test_no_lint_at_rule_no_vendor_prefix() {
        expect_no_lint("@keyframes spin { from { opacity: 0; } }", "at-rule-no-vendor-prefix", "css");
        expect_no_lint("@media print { a { color: red; } }", "at-rule-no-vendor-prefix", "css");
        expect_no_lint("@import 'a.css';", "at-rule-no-vendor-prefix", "css");
    }

    #[test]
    fn test_at_rule_no_vendor_prefix_highlight() {
        expect_diagnostic_highlight(
            "@-webkit-keyframes spin { from { opacity: 0; } }",
            "at-rule-no-vendor-prefix",
            "css",
            "@-webkit-keyframes",
        );
    }
}
