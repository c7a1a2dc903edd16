pub(crate) mod string_quotes;

#[cfg(test)]
mod tests {
    use crate::utils_test::*;

    #[test]
    fn test_lint_string_quotes() {
        use insta::assert_snapshot;

        let expected_message = "Expected single quotes";

        expect_lint(
            "a::before { content: \"x\"; }",
            expected_message,
            "string-quotes",
            "css",
        );
        expect_lint(
            "@import \"theme.css\";",
            expected_message,
            "string-quotes",
            "css",
        );
        expect_lint(
            "input[type=\"text\"] { color: red; }",
            expected_message,
            "string-quotes",
            "css",
        );
        expect_lint(
            "a { background: url(\"a.png\"); }",
            expected_message,
            "string-quotes",
            "css",
        );

        assert_snapshot!(
            get_fixed_text(
                vec![
                    "a::before { content: \"x\"; }",
                    "a::before { content: \"a \\\"b\\\"\"; }",
                    "input[type=\"text\"] { font-family: \"Open Sans\", serif; }",
                ],
                "string-quotes",
                "css",
            ),
            @r#"
OLD:
====
a::before { content: "x"; }
NEW:
====
a::before { content: 'x'; }

OLD:
====
a::before { content: "a \"b\""; }
NEW:
====
a::before { content: 'a "b"'; }

OLD:
====
input[type="text"] { font-family: "Open Sans", serif; }
NEW:
====
input[type='text'] { font-family: 'Open Sans', serif; }
"#
        );
    }

    #[test]
    fn test_no_lint_string_quotes() {
        expect_no_lint("a::before { content: 'x'; }", "string-quotes", "css");
        expect_no_lint("a { background: url(a.png); }", "string-quotes", "css");
        // Switching quotes would require escaping
        expect_no_lint("a::before { content: \"it's\"; }", "string-quotes", "css");
        expect_no_lint("/* \"comment\" */ a { color: red; }", "string-quotes", "css");
    }

    #[test]
    fn test_string_quotes_option() {
        let preset = "[style]\nstring-quotes = { level = \"error\", quote = \"double\" }";
        assert_eq!(count_lints("a::before { content: \"x\"; }", preset, "css"), 0);
        assert_eq!(count_lints("a::before { content: 'x'; }", preset, "css"), 1);
        assert_eq!(
            apply_fixes_with_preset("a::before { content: 'x'; }", preset, "css"),
            "a::before { content: \"x\"; }"
        );
    }

    #[test]
    fn test_string_quotes_highlight() {
        expect_diagnostic_highlight(
            "a::before { content: \"x\"; }",
            "string-quotes",
            "css",
            "\"x\"",
        );
    }
}
