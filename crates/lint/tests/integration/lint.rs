use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::lint_in;

#[test]
fn test_no_problems() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("a.css"), "a {\n  color: red;\n}\n")?;
    std::fs::write(directory.join("a.js"), "const a = () => 1\n")?;

    insta::assert_snapshot!(
        lint_in(directory).arg(".").run(),
        @r"
exit_code: 0
----- stdout -----

----- stderr -----

----- args -----
."
    );

    Ok(())
}

#[test]
fn test_duplicate_declarations() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("a.css"),
        "a {\n  color: red;\n  color: red;\n}\n",
    )?;

    insta::assert_snapshot!(
        lint_in(directory).arg("a.css").run(),
        @r"
exit_code: 1
----- stdout -----
1 problem found
  a.css:3:3: Expected no duplicate declarations. Found color: red

----- stderr -----

----- args -----
a.css"
    );

    Ok(())
}

#[test]
fn test_state_qualified_selectors() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("a.css"),
        "a:hover {\n  color: red;\n}\na:focus {\n  color: red;\n}\n",
    )?;
    let output = lint_in(directory).arg(".").run();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    // The third rule isn't qualified by a state
    std::fs::write(
        directory.join("a.css"),
        "a:hover {\n  color: red;\n}\na:focus {\n  color: red;\n}\na {\n  color: red;\n}\n",
    )?;
    let output = lint_in(directory).arg(".").run();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        output.stdout,
        "1 problem found\n  a.css:8:3: Expected no duplicate declarations. Found color: red\n"
    );

    Ok(())
}

#[test]
fn test_records_are_sorted_by_file() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("b.css"),
        "a {\n  color: red;\n  color: red;\n}\n",
    )?;
    std::fs::write(directory.join("a.js"), "debugger\nif (x == 1) {}\n")?;

    insta::assert_snapshot!(
        lint_in(directory).arg(".").run(),
        @r"
exit_code: 1
----- stdout -----
4 problems found
  a.js:1:1: Unexpected 'debugger' statement.
  a.js:2:7: Expected '===' and instead saw '=='.
  a.js:2:13: Empty block statement.
  b.css:3:3: Expected no duplicate declarations. Found color: red

----- stderr -----

----- args -----
."
    );

    Ok(())
}

#[test]
fn test_parse_error_fails_only_its_checker() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("a.css"),
        "a {\n  color: red;\n  color: red;\n}\n",
    )?;
    std::fs::write(directory.join("broken.js"), "let = ;\n")?;

    insta::assert_snapshot!(
        lint_in(directory)
            .arg(".")
            .run(),
        @r"
exit_code: 1
----- stdout -----
1 problem found
  a.css:3:3: Expected no duplicate declarations. Found color: red

----- stderr -----
Warning: script checker failed: Failed to parse [TEMP_DIR]/broken.js due to syntax errors.

----- args -----
."
    );

    Ok(())
}

#[test]
fn test_parse_error_alone_does_not_fail() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("broken.css"), "a { color: red;\n")?;

    let output = lint_in(directory).arg(".").run();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(output.failed_checkers(), vec!["style"]);
    assert_eq!(
        output.stderr,
        "Warning: style checker failed: Failed to parse [TEMP_DIR]/broken.css due to syntax errors.\n"
    );

    Ok(())
}

#[test]
fn test_markup_positions() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("index.html"),
        "<html>\n  <head>\n    <style>\n      a { color: red; }\n      b { color: red; }\n    </style>\n  </head>\n  <body>\n    <script>\n      debugger\n    </script>\n  </body>\n</html>\n",
    )?;

    insta::assert_snapshot!(
        lint_in(directory).arg("index.html").run(),
        @r"
exit_code: 1
----- stdout -----
2 problems found
  index.html:5:11: Expected no duplicate declarations. Found color: red
  index.html:10:7: Unexpected 'debugger' statement.

----- stderr -----

----- args -----
index.html"
    );

    Ok(())
}
