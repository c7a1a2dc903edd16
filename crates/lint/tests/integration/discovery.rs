use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::lint_in;

const DUPLICATES: &str = "a {\n  color: red;\n  color: red;\n}\n";

#[test]
fn test_no_files_found() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("notes.txt"), DUPLICATES)?;

    insta::assert_snapshot!(
        lint_in(directory).arg(".").run(),
        @r"
exit_code: 0
----- stdout -----

----- stderr -----
Warning: No files to check found under the given path(s).

----- args -----
."
    );

    Ok(())
}

#[test]
fn test_gitignore_is_honoured() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    // Not a git repository
    std::fs::write(directory.join(".gitignore"), "ignored.css\nbuild/\n")?;
    std::fs::write(directory.join("ignored.css"), DUPLICATES)?;
    std::fs::create_dir(directory.join("build"))?;
    std::fs::write(directory.join("build").join("out.css"), DUPLICATES)?;
    std::fs::write(directory.join("kept.css"), DUPLICATES)?;

    let output = lint_in(directory).arg(".").run();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        output.problems(),
        vec!["kept.css:3:3: Expected no duplicate declarations. Found color: red"]
    );

    Ok(())
}

#[test]
fn test_default_excludes() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::create_dir_all(directory.join("node_modules").join("pkg"))?;
    std::fs::write(
        directory.join("node_modules").join("pkg").join("index.css"),
        DUPLICATES,
    )?;
    std::fs::write(directory.join("vendor.min.css"), DUPLICATES)?;
    std::fs::write(directory.join("vendor.min.js"), "debugger\n")?;

    let output = lint_in(directory).arg(".").run();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("No files to check found"));

    Ok(())
}

#[test]
fn test_glob_arguments() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::create_dir_all(directory.join("src").join("nested"))?;
    std::fs::write(directory.join("src").join("a.css"), DUPLICATES)?;
    std::fs::write(directory.join("src").join("nested").join("b.css"), DUPLICATES)?;
    std::fs::write(directory.join("src").join("c.js"), "debugger\n")?;
    std::fs::write(directory.join("d.css"), DUPLICATES)?;

    let output = lint_in(directory).arg("src/*.css").run();
    assert_eq!(
        output.problems(),
        vec!["src/a.css:3:3: Expected no duplicate declarations. Found color: red"]
    );

    let output = lint_in(directory).arg("src/**/*.css").run();
    assert_eq!(
        output.problems(),
        vec![
            "src/a.css:3:3: Expected no duplicate declarations. Found color: red",
            "src/nested/b.css:3:3: Expected no duplicate declarations. Found color: red",
        ]
    );

    Ok(())
}

#[test]
fn test_explicit_files_are_deduplicated() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("a.css"), DUPLICATES)?;

    let output = lint_in(directory).arg("a.css").arg(".").arg("a.css").run();
    assert_eq!(
        output.stdout,
        "1 problem found\n  a.css:3:3: Expected no duplicate declarations. Found color: red\n"
    );

    Ok(())
}
