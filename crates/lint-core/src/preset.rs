//! The bundled rule configuration.
//!
//! `preset.toml` is embedded at compile time. It is deserialized into
//! [PresetToml], which only knows about strings, and then validated into a
//! [Preset], which only knows about [Rule]s. Every mistake in the file is
//! reported when the preset is loaded, never when a rule runs.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

use crate::rule_set::{Language, Rule, RuleSet};

/// Source of the preset shipped with `lint`.
pub const BUNDLED_PRESET: &str = include_str!("preset.toml");

#[derive(Debug)]
pub enum PresetError {
    Deserialize(toml::de::Error),
    UnknownRule { table: Language, name: String },
    WrongTable { table: Language, rule: Rule },
    UnexpectedOption { rule: Rule, option: &'static str },
    ZeroIndentation(Rule),
}

impl std::error::Error for PresetError {}

impl Display for PresetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deserialize(err) => write!(f, "Failed to parse the rule preset:\n{err}"),
            Self::UnknownRule { table, name } => {
                write!(f, "Unknown rule `{name}` in table `[{table}]` of the rule preset")
            }
            Self::WrongTable { table, rule } => write!(
                f,
                "Rule `{rule}` is checked against {} files but is listed in table `[{table}]`",
                rule.language()
            ),
            Self::UnexpectedOption { rule, option } => {
                write!(f, "Rule `{rule}` doesn't take the option `{option}`")
            }
            Self::ZeroIndentation(rule) => {
                write!(f, "Option `spaces` of rule `{rule}` must be at least 1")
            }
        }
    }
}

/// How a violation of a rule is reported. `Off` disables the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Off,
    Warn,
    Error,
}

impl Level {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred delimiter for strings in stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quote {
    #[default]
    Single,
    Double,
}

impl Quote {
    pub const fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::Single => Self::Double,
            Self::Double => Self::Single,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetToml {
    #[serde(default)]
    pub style: BTreeMap<String, RuleEntry>,
    #[serde(default)]
    pub script: BTreeMap<String, RuleEntry>,
}

/// A rule is either given a bare level or a table with a level and options.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RuleEntry {
    Level(Level),
    Detailed(DetailedEntry),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DetailedEntry {
    pub level: Level,
    pub spaces: Option<usize>,
    pub quote: Option<Quote>,
    pub switch_case: Option<usize>,
}

/// Typed options of the rules that take some.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleOptions {
    /// Number of spaces per indentation level (`indentation`)
    pub indent_spaces: usize,
    /// Preferred string delimiter (`string-quotes`)
    pub quote: Quote,
    /// Number of spaces per indentation level in scripts (`indent`)
    pub script_indent_spaces: usize,
    /// Indentation levels of `case` clauses in a `switch` (`indent`)
    pub switch_case: usize,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self { indent_spaces: 2, quote: Quote::Single, script_indent_spaces: 4, switch_case: 0 }
    }
}

/// The validated rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Preset {
    levels: BTreeMap<Rule, Level>,
    pub options: RuleOptions,
}

impl Preset {
    /// Load the preset shipped with `lint`
    pub fn bundled() -> Result<Self, PresetError> {
        Self::parse(BUNDLED_PRESET)
    }

    pub fn parse(source: &str) -> Result<Self, PresetError> {
        let toml: PresetToml = toml::from_str(source).map_err(PresetError::Deserialize)?;
        toml.into_preset()
    }

    /// Level of a rule, `Off` when the preset doesn't mention it
    pub fn level(&self, rule: Rule) -> Level {
        self.levels.get(&rule).copied().unwrap_or_default()
    }

    pub fn is_enabled(&self, rule: Rule) -> bool {
        self.level(rule) != Level::Off
    }

    /// Rules whose level is not `Off`
    pub fn enabled_rules(&self) -> RuleSet {
        self.levels
            .iter()
            .filter(|(_, level)| **level != Level::Off)
            .map(|(rule, _)| *rule)
            .collect()
    }
}

impl PresetToml {
    pub fn into_preset(self) -> Result<Preset, PresetError> {
        let mut preset = Preset::default();

        for (table, entries) in [(Language::Style, self.style), (Language::Script, self.script)] {
            for (name, entry) in entries {
                let Some(rule) = Rule::from_name(&name) else {
                    return Err(PresetError::UnknownRule { table, name });
                };
                if rule.language() != table {
                    return Err(PresetError::WrongTable { table, rule });
                }

                let level = match entry {
                    RuleEntry::Level(level) => level,
                    RuleEntry::Detailed(detailed) => {
                        apply_options(rule, &detailed, &mut preset.options)?;
                        detailed.level
                    }
                };
                preset.levels.insert(rule, level);
            }
        }

        Ok(preset)
    }
}

fn apply_options(
    rule: Rule,
    entry: &DetailedEntry,
    options: &mut RuleOptions,
) -> Result<(), PresetError> {
    if let Some(spaces) = entry.spaces {
        if spaces == 0 && matches!(rule, Rule::Indentation | Rule::Indent) {
            return Err(PresetError::ZeroIndentation(rule));
        }
        match rule {
            Rule::Indentation => options.indent_spaces = spaces,
            Rule::Indent => options.script_indent_spaces = spaces,
            _ => return Err(PresetError::UnexpectedOption { rule, option: "spaces" }),
        }
    }

    if let Some(levels) = entry.switch_case {
        if rule != Rule::Indent {
            return Err(PresetError::UnexpectedOption { rule, option: "switch-case" });
        }
        options.switch_case = levels;
    }

    if let Some(quote) = entry.quote {
        if rule != Rule::StringQuotes {
            return Err(PresetError::UnexpectedOption { rule, option: "quote" });
        }
        options.quote = quote;
    }

    Ok(())
}
