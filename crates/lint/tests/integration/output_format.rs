use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::lint_in;

#[test]
fn test_json_output() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("a.css"), "a {\n  color: red;\n  color: red;\n}\n")?;
    std::fs::write(directory.join("broken.js"), "let = ;\n")?;

    insta::assert_snapshot!(
        lint_in(directory)
            .arg(".")
            .arg("--output-format")
            .arg("json")
            .run(),
        @r#"
exit_code: 1
----- stdout -----
{
  "diagnostics": [
    {
      "file": "a.css",
      "line": 3,
      "column": 3,
      "message": "Expected no duplicate declarations. Found color: red",
      "rule": "no-duplicate-declarations",
      "severity": "error",
      "producer": "style"
    }
  ],
  "errors": [
    {
      "producer": "script",
      "error": "Failed to parse [TEMP_DIR]/broken.js due to syntax errors."
    }
  ]
}

----- stderr -----
Warning: script checker failed: Failed to parse [TEMP_DIR]/broken.js due to syntax errors.

----- args -----
. --output-format json"#
    );

    Ok(())
}

#[test]
fn test_github_output() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("a.js"), "if (x != 1) {}\n")?;

    insta::assert_snapshot!(
        lint_in(directory)
            .arg(".")
            .arg("--output-format=github")
            .run(),
        @r"
exit_code: 1
----- stdout -----
::error title=lint (eqeqeq),file=a.js,line=1,col=7::a.js:1:7: Expected '!==' and instead saw '!='.
::error title=lint (no-empty),file=a.js,line=1,col=13::a.js:1:13: Empty block statement.

----- stderr -----

----- args -----
. --output-format=github"
    );

    Ok(())
}
