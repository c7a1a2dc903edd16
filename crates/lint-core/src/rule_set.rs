use std::fmt;

/// Language a rule applies to. Every rule belongs to exactly one checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// Stylesheets, and `<style>` elements embedded in markup
    Style,
    /// Scripts, and `<script>` elements embedded in markup
    Script,
}

impl Language {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Style => "style",
            Self::Script => "script",
        }
    }

    pub const ALL: &'static [Language] = &[Language::Style, Language::Script];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixStatus {
    #[default]
    None,
    Safe,
}

macro_rules! declare_rules {
    (
        $(
            $variant:ident => {
                name: $name:literal,
                language: $language:ident,
                fix: $fix:ident,
            }
        ),* $(,)?
    ) => {
        /// Enum representing all available linting rules
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Rule {
            $($variant),*
        }

        impl Rule {
            /// Get the rule's string name
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }

            /// Get the language the rule is checked against
            pub const fn language(self) -> Language {
                match self {
                    $(Self::$variant => Language::$language),*
                }
            }

            /// Get the rule's fix status
            pub const fn fix_status(self) -> FixStatus {
                match self {
                    $(Self::$variant => FixStatus::$fix),*
                }
            }

            /// Check if the rule has a safe fix
            pub const fn has_safe_fix(self) -> bool {
                matches!(self.fix_status(), FixStatus::Safe)
            }

            /// Check if the rule has no fix
            pub const fn has_no_fix(self) -> bool {
                matches!(self.fix_status(), FixStatus::None)
            }

            /// Parse a rule from its string name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Get all rules as a slice
            pub const fn all() -> &'static [Rule] {
                ALL_RULES
            }
        }

        impl fmt::Display for Rule {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        /// Static array containing all rules
        pub const ALL_RULES: &[Rule] = &[
            $(Rule::$variant),*
        ];
    };
}

// Declare all rules with their metadata
declare_rules! {
    NoDuplicateDeclarations => {
        name: "no-duplicate-declarations",
        language: Style,
        fix: None,
    },
    Indentation => {
        name: "indentation",
        language: Style,
        fix: Safe,
    },
    StringQuotes => {
        name: "string-quotes",
        language: Style,
        fix: Safe,
    },
    PropertyNoVendorPrefix => {
        name: "property-no-vendor-prefix",
        language: Style,
        fix: None,
    },
    AtRuleNoVendorPrefix => {
        name: "at-rule-no-vendor-prefix",
        language: Style,
        fix: None,
    },
    SelectorNoVendorPrefix => {
        name: "selector-no-vendor-prefix",
        language: Style,
        fix: None,
    },
    ValueNoVendorPrefix => {
        name: "value-no-vendor-prefix",
        language: Style,
        fix: None,
    },
    MediaFeatureNameNoVendorPrefix => {
        name: "media-feature-name-no-vendor-prefix",
        language: Style,
        fix: None,
    },
    NoFuncKeyword => {
        name: "no-func-keyword",
        language: Script,
        fix: None,
    },
    Indent => {
        name: "indent",
        language: Script,
        fix: Safe,
    },
    Semi => {
        name: "semi",
        language: Script,
        fix: Safe,
    },
    NoDebugger => {
        name: "no-debugger",
        language: Script,
        fix: None,
    },
    Eqeqeq => {
        name: "eqeqeq",
        language: Script,
        fix: None,
    },
    NoEval => {
        name: "no-eval",
        language: Script,
        fix: None,
    },
    NoWith => {
        name: "no-with",
        language: Script,
        fix: None,
    },
    NoEmpty => {
        name: "no-empty",
        language: Script,
        fix: None,
    },
    UseIsnan => {
        name: "use-isnan",
        language: Script,
        fix: None,
    },
}

/// A collection of rules
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set containing all rules
    pub fn all() -> Self {
        Self { rules: ALL_RULES.to_vec() }
    }

    /// Get an iterator over the rules
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Check if the rule set contains a specific rule
    pub fn contains(&self, rule: &Rule) -> bool {
        self.rules.contains(rule)
    }

    /// Get the number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the rule set is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Keep only the rules checked against `language`
    pub fn for_language(&self, language: Language) -> Self {
        self.iter()
            .filter(|rule| rule.language() == language)
            .collect()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self { rules: iter.into_iter().collect() }
    }
}

impl<'a> FromIterator<&'a Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = &'a Rule>>(iter: I) -> Self {
        Self { rules: iter.into_iter().copied().collect() }
    }
}
