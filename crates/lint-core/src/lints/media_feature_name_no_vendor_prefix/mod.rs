pub(crate) mod media_feature_name_no_vendor_prefix;

#[cfg(test)]
mod tests {
    use crate::utils_test::*;

    #[test]
    fn test_lint_media_feature_name_no_vendor_prefix() {
        expect_lint(
            "@media (-webkit-min-device-pixel-ratio: 2) { a { color: red; } }",
            "Unexpected vendor-prefix \"-webkit-min-device-pixel-ratio\"",
            "media-feature-name-no-vendor-prefix",
            "css",
        );
        expect_lint(
            "@media screen and (-o-min-device-pixel-ratio: 2) { a { color: red; } }",
            "Unexpected vendor-prefix \"-o-min-device-pixel-ratio\"",
            "media-feature-name-no-vendor-prefix",
            "css",
        );
    }

    #[test]
    fn test_no_lint_media_feature_name_no_vendor_prefix() {
        expect_no_lint(
            "@media (min-resolution: 2dppx) { a { color: red; } }",
            "media-feature-name-no-vendor-prefix",
            "css",
        );
        expect_no_lint(
            "@media print { a { -webkit-transition: none; } }",
            "media-feature-name-no-vendor-prefix",
            "css",
        );
    }

    #[test]
    fn test_media_feature_name_no_vendor_prefix_highlight() {
        expect_diagnostic_highlight(
            "@media (-moz-touch-enabled: 1) { a { color: red; } }",
            "media-feature-name-no-vendor-prefix",
            "css",
            "-moz-touch-enabled",
        );
    }
}
