use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::lint_in;

#[test]
fn test_fix_stylesheet() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let path = directory.join("a.css");
    std::fs::write(&path, "a::before {\ncontent: \"x\";\n}\n")?;

    insta::assert_snapshot!(
        lint_in(directory).arg("--fix").arg(".").run(),
        @r"
exit_code: 0
----- stdout -----

----- stderr -----

----- args -----
--fix ."
    );
    assert_eq!(std::fs::read_to_string(&path)?, "a::before {\n  content: 'x';\n}\n");

    Ok(())
}

#[test]
fn test_fix_keeps_unfixable_problems() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let path = directory.join("a.js");
    std::fs::write(&path, "let a = 1;\ndebugger;\n")?;

    insta::assert_snapshot!(
        lint_in(directory).arg("--fix").arg("a.js").run(),
        @r"
exit_code: 1
----- stdout -----
1 problem found
  a.js:2:1: Unexpected 'debugger' statement.

----- stderr -----

----- args -----
--fix a.js"
    );
    assert_eq!(std::fs::read_to_string(&path)?, "let a = 1\ndebugger\n");

    Ok(())
}

#[test]
fn test_fix_is_idempotent() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let path = directory.join("a.css");
    std::fs::write(&path, "@media print {\na {\ncolor: red;\n}\n}\n")?;

    let output = lint_in(directory).arg("--fix").arg(".").run();
    assert!(output.status.success());
    let fixed = std::fs::read_to_string(&path)?;
    assert_eq!(fixed, "@media print {\n  a {\n    color: red;\n  }\n}\n");

    let output = lint_in(directory).arg("--fix").arg(".").run();
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&path)?, fixed);

    Ok(())
}

#[test]
fn test_fix_markup_with_both_checkers() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let path = directory.join("index.html");
    std::fs::write(
        &path,
        "<style>\na::before { content: \"x\"; }\n</style>\n<script>\nlet a = 1;\n</script>\n<p>\"quoted\";</p>\n",
    )?;

    let output = lint_in(directory).arg("--fix").arg(".").run();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "<style>\na::before { content: 'x'; }\n</style>\n<script>\nlet a = 1\n</script>\n<p>\"quoted\";</p>\n"
    );

    Ok(())
}

#[test]
fn test_without_fix_files_are_untouched() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let path = directory.join("a.js");
    std::fs::write(&path, "let a = 1;\n")?;

    let output = lint_in(directory).arg(".").run();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stdout, "1 problem found\n  a.js:1:10: Extra semicolon.\n");
    assert_eq!(std::fs::read_to_string(&path)?, "let a = 1;\n");

    Ok(())
}
