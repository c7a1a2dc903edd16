use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tree_sitter::Tree;

use crate::aggregate::{Batch, DiagnosticRecord};
use crate::analyze;
use crate::config::Config;
use crate::diagnostic::*;
use crate::document::{Document, grammar, new_parser};
use crate::fix::apply_fixes;
use crate::location::Location;
use crate::preset::RuleOptions;
use crate::rule_set::{Language, Rule, RuleSet};

/// Upper bound on the number of lint/fix rounds run on one file.
const MAX_FIX_ROUNDS: usize = 10;

/// A component that scans the files it handles and yields diagnostics,
/// rewriting them first when fixes are requested.
pub trait Checker: Send + Sync {
    /// Name reported in warnings and in the JSON output
    fn name(&self) -> &'static str;

    /// Language of the files, or embedded regions, the checker handles
    fn language(&self) -> Language;

    /// Run the rules on a parsed document
    fn analyze(&self, tree: &Tree, checker: &mut FileChecker) -> Result<()>;

    /// Whether `path` is handled by this checker
    fn handles(&self, path: &Path) -> bool {
        crate::fs::languages_for(path).contains(&self.language())
    }

    /// Lint every file the checker handles. A file that can't be parsed
    /// fails the whole run.
    fn check(&self, config: &Config) -> Result<Vec<Diagnostic>> {
        new_parser(&grammar(self.language()), self.language().as_str())
            .with_context(|| format!("The {} checker is unavailable", self.name()))?;

        let paths = config.paths(self.language());
        tracing::debug!("Running the {} checker on {} files", self.name(), paths.len());

        let per_file: Vec<Vec<Diagnostic>> = paths
            .par_iter()
            .map(|path| {
                if config.apply_fixes {
                    lint_fix(path, self, config)
                } else {
                    lint_only(path, self, config)
                }
            })
            .collect::<Result<_>>()?;

        let mut diagnostics: Vec<Diagnostic> = per_file.into_iter().flatten().collect();
        diagnostics.sort();
        Ok(diagnostics)
    }
}

/// Lints the contents of stylesheets and of `<style>` elements.
pub struct StyleChecker;

impl Checker for StyleChecker {
    fn name(&self) -> &'static str {
        "style"
    }

    fn language(&self) -> Language {
        Language::Style
    }

    fn analyze(&self, tree: &Tree, checker: &mut FileChecker) -> Result<()> {
        analyze::style::check_stylesheet(tree, checker)
    }
}

/// Lints the contents of scripts and of `<script>` elements.
pub struct ScriptChecker;

impl Checker for ScriptChecker {
    fn name(&self) -> &'static str {
        "script"
    }

    fn language(&self) -> Language {
        Language::Script
    }

    fn analyze(&self, tree: &Tree, checker: &mut FileChecker) -> Result<()> {
        analyze::script::check_script(tree, checker)
    }
}

/// The checkers compiled into `lint`, style first.
pub fn builtin_checkers() -> Vec<Box<dyn Checker>> {
    vec![Box::new(StyleChecker), Box::new(ScriptChecker)]
}

/// Run every checker and collect one batch of records per checker.
///
/// Checkers run in parallel, except when fixing files that several of them
/// handle: they then run one after the other so that each one reads the
/// file as left by the previous one.
pub fn check(config: Config) -> Vec<Batch> {
    check_with(&builtin_checkers(), &config)
}

pub fn check_with(checkers: &[Box<dyn Checker>], config: &Config) -> Vec<Batch> {
    let run = |checker: &Box<dyn Checker>| {
        Batch::collect(checker.name(), checker.check(config), |diagnostic| {
            DiagnosticRecord::from(&diagnostic)
        })
    };

    if config.apply_fixes && config.has_shared_paths() {
        tracing::debug!("Running the checkers sequentially");
        checkers.iter().map(run).collect()
    } else {
        checkers.par_iter().map(run).collect()
    }
}

pub fn lint_only<C: Checker + ?Sized>(
    path: &Path,
    checker: &C,
    config: &Config,
) -> Result<Vec<Diagnostic>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    get_checks(&contents, path, checker, config)
}

pub fn lint_fix<C: Checker + ?Sized>(
    path: &Path,
    checker: &C,
    config: &Config,
) -> Result<Vec<Diagnostic>> {
    let mut has_skipped_fixes = true;
    let mut checks: Vec<Diagnostic>;
    let mut rounds = 0;

    loop {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        checks = get_checks(&contents, path, checker, config)?;

        rounds += 1;
        if !has_skipped_fixes || rounds > MAX_FIX_ROUNDS {
            break;
        }

        let (new_has_skipped_fixes, fixed_text) = apply_fixes(&checks, &contents);
        has_skipped_fixes = new_has_skipped_fixes;

        if fixed_text != contents {
            tracing::debug!("Writing fixes to {}", path.display());
            fs::write(path, fixed_text)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
    }

    Ok(checks)
}

#[derive(Debug)]
// The object that collects diagnostics while the rules run on a document.
// One per analyzed document.
pub struct FileChecker<'doc> {
    pub document: &'doc Document,
    // The diagnostics to report (possibly empty).
    pub diagnostics: Vec<Diagnostic>,
    // Enabled rules of the checker's language.
    pub rules: RuleSet,
    pub options: RuleOptions,
}

impl<'doc> FileChecker<'doc> {
    fn new(document: &'doc Document, rules: RuleSet, options: RuleOptions) -> Self {
        Self { document, diagnostics: vec![], rules, options }
    }

    // This takes an Option<Diagnostic> because each lint rule reports a
    // Some(Diagnostic) or None.
    pub(crate) fn report_diagnostic(&mut self, diagnostic: Option<Diagnostic>) {
        if let Some(diagnostic) = diagnostic {
            self.diagnostics.push(diagnostic);
        }
    }

    pub(crate) fn is_rule_enabled(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }

    pub(crate) fn text(&self) -> &'doc str {
        &self.document.text
    }
}

// Parses the document, runs the checker's rules on it and completes the
// diagnostics with their file, location and level.
pub fn get_checks<C: Checker + ?Sized>(
    contents: &str,
    file: &Path,
    checker: &C,
    config: &Config,
) -> Result<Vec<Diagnostic>> {
    let document = Document::new(file, contents.to_string(), checker.language())?;
    if document.is_empty() {
        return Ok(vec![]);
    }

    let tree = document.parse()?;

    let rules = config.rules_to_apply.for_language(checker.language());
    let mut file_checker = FileChecker::new(&document, rules, *config.options());
    checker.analyze(&tree, &mut file_checker)?;

    let mut diagnostics: Vec<Diagnostic> = file_checker
        .diagnostics
        .into_iter()
        .map(|mut x| {
            x.filename = file.to_path_buf();
            x.location = Location::from_offset(contents, x.range.start);
            x.level = config.preset.level(x.rule());
            // A fix must stay in the part of the file written in the
            // checker's language.
            let keep_fix = x.rule().has_safe_fix()
                && x.fix
                    .as_ref()
                    .is_some_and(|fix| document.contains(fix.start, fix.end));
            if !keep_fix {
                x.fix = None;
            }
            x
        })
        .collect();

    diagnostics.sort();
    Ok(diagnostics)
}
