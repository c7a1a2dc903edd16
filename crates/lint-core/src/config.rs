use std::path::PathBuf;

use anyhow::Result;

use crate::fs::languages_for;
use crate::preset::{Preset, RuleOptions};
use crate::rule_set::{Language, RuleSet};

#[derive(Clone, Debug)]
/// Arguments provided in the CLI.
pub struct ArgsConfig {
    /// Did the user pass the --fix flag?
    pub fix: bool,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Paths to the files handled by the style checker, sorted.
    pub style_paths: Vec<PathBuf>,
    /// Paths to the files handled by the script checker, sorted.
    pub script_paths: Vec<PathBuf>,
    /// Rules whose level in the preset is not `off`.
    pub rules_to_apply: RuleSet,
    /// The validated preset the rules were taken from.
    pub preset: Preset,
    /// Did the user pass the --fix flag?
    pub apply_fixes: bool,
}

impl Config {
    pub fn paths(&self, language: Language) -> &[PathBuf] {
        match language {
            Language::Style => &self.style_paths,
            Language::Script => &self.script_paths,
        }
    }

    pub fn options(&self) -> &RuleOptions {
        &self.preset.options
    }

    /// Whether some file is handled by both checkers. Both would then write
    /// to it in fix mode.
    pub fn has_shared_paths(&self) -> bool {
        self.style_paths
            .iter()
            .any(|path| self.script_paths.binary_search(path).is_ok())
    }
}

/// Partition the discovered `paths` between the checkers, based on their
/// extension. Files that no checker handles are dropped.
pub fn build_config(args: &ArgsConfig, preset: Preset, paths: Vec<PathBuf>) -> Result<Config> {
    let mut style_paths = Vec::new();
    let mut script_paths = Vec::new();

    for path in paths {
        let languages = languages_for(&path);
        if languages.is_empty() {
            tracing::debug!("Skipping {} (unknown extension)", path.display());
            continue;
        }
        if languages.contains(&Language::Style) {
            style_paths.push(path.clone());
        }
        if languages.contains(&Language::Script) {
            script_paths.push(path);
        }
    }

    style_paths.sort();
    style_paths.dedup();
    script_paths.sort();
    script_paths.dedup();

    let rules_to_apply = preset.enabled_rules();

    Ok(Config {
        style_paths,
        script_paths,
        rules_to_apply,
        preset,
        apply_fixes: args.fix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_partitioned_by_extension() {
        let args = ArgsConfig { fix: false };
        let config = build_config(
            &args,
            Preset::bundled().unwrap(),
            vec![
                PathBuf::from("b.js"),
                PathBuf::from("a.css"),
                PathBuf::from("index.html"),
                PathBuf::from("notes.txt"),
                PathBuf::from("a.css"),
            ],
        )
        .unwrap();

        assert_eq!(
            config.paths(Language::Style),
            &[PathBuf::from("a.css"), PathBuf::from("index.html")]
        );
        assert_eq!(
            config.paths(Language::Script),
            &[PathBuf::from("b.js"), PathBuf::from("index.html")]
        );
        assert!(config.has_shared_paths());
        assert!(!config.apply_fixes);
    }

    #[test]
    fn test_no_shared_paths() {
        let args = ArgsConfig { fix: true };
        let config = build_config(
            &args,
            Preset::bundled().unwrap(),
            vec![PathBuf::from("a.css"), PathBuf::from("a.js")],
        )
        .unwrap();
        assert!(!config.has_shared_paths());
        assert!(config.apply_fixes);
    }
}
