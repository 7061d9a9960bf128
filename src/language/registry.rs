use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};

use crate::config::CustomLanguageConfig;
use crate::error::{LineTallyError, Result};

const C_SINGLE: &str = "//.*$";
const C_BLOCK: &str = r"/\*[\s\S]*?\*/";
const JSX_BLOCK: &str = r"\{/\*[\s\S]*?\*/\}";
const MARKUP_BLOCK: &str = r"<!--[\s\S]*?-->";
const HASH_SINGLE: &str = "#.*$";
const PY_DOUBLE_DOCSTRING: &str = r#""""[\s\S]*?""""#;
const PY_SINGLE_DOCSTRING: &str = r"'''[\s\S]*?'''";

static EMPTY_RULE_SET: LazyLock<LanguageRuleSet> = LazyLock::new(LanguageRuleSet::empty);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    SingleLine,
    MultiLine,
}

/// A comment pattern and how it is applied.
///
/// Single-line rules are anchored so they only match at the start of a
/// trimmed line. Multi-line rules are matched against raw content with `.`
/// matching `\n`.
#[derive(Debug, Clone)]
pub struct CommentRule {
    pattern: Regex,
    kind: CommentKind,
}

impl CommentRule {
    /// Compile a rule from a regular expression.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn new(pattern: &str, kind: CommentKind) -> Result<Self> {
        let compiled = match kind {
            CommentKind::SingleLine => Regex::new(&format!("^(?:{pattern})")),
            CommentKind::MultiLine => RegexBuilder::new(pattern)
                .dot_matches_new_line(true)
                .build(),
        };
        let pattern = compiled.map_err(|e| LineTallyError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;
        Ok(Self { pattern, kind })
    }

    /// Compile a single-line rule.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn single_line(pattern: &str) -> Result<Self> {
        Self::new(pattern, CommentKind::SingleLine)
    }

    /// Compile a multi-line rule.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn multi_line(pattern: &str) -> Result<Self> {
        Self::new(pattern, CommentKind::MultiLine)
    }

    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.pattern
    }

    /// True if a trimmed line begins with this rule's pattern.
    #[must_use]
    pub fn starts_line(&self, trimmed: &str) -> bool {
        self.kind == CommentKind::SingleLine && self.pattern.is_match(trimmed)
    }
}

#[derive(Debug, Clone)]
pub struct LanguageRuleSet {
    pub tag: String,
    pub name: String,
    rules: Vec<CommentRule>,
}

impl LanguageRuleSet {
    #[must_use]
    pub fn new(tag: &str, name: &str, rules: Vec<CommentRule>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            name: name.to_string(),
            rules,
        }
    }

    /// The rule set used for tags nothing is registered for.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tag: String::new(),
            name: String::new(),
            rules: Vec::new(),
        }
    }

    pub fn single_line_rules(&self) -> impl Iterator<Item = &CommentRule> {
        self.rules
            .iter()
            .filter(|r| r.kind == CommentKind::SingleLine)
    }

    pub fn multi_line_rules(&self) -> impl Iterator<Item = &CommentRule> {
        self.rules
            .iter()
            .filter(|r| r.kind == CommentKind::MultiLine)
    }

    /// True when no comment rules apply, so every non-blank line is code.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Language rule sets keyed by tag, in registration order.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: IndexMap<String, LanguageRuleSet>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: IndexMap::new(),
        }
    }

    /// Register a rule set. A later registration replaces an earlier one with the same tag.
    pub fn register(&mut self, language: LanguageRuleSet) {
        self.languages.insert(language.tag.clone(), language);
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&LanguageRuleSet> {
        self.languages.get(tag)
    }

    /// Rule set for `tag`, or the empty rule set when the tag is unknown.
    #[must_use]
    pub fn rules_for(&self, tag: &str) -> &LanguageRuleSet {
        self.get(tag).unwrap_or(&*EMPTY_RULE_SET)
    }

    /// Human-readable language name; unknown tags are shown upper-cased.
    #[must_use]
    pub fn display_name(&self, tag: &str) -> String {
        self.get(tag)
            .map_or_else(|| tag.to_uppercase(), |l| l.name.clone())
    }

    /// Built-in table plus languages declared in configuration.
    ///
    /// # Errors
    /// Returns an error if any configured pattern fails to compile.
    pub fn with_custom_languages(custom: &HashMap<String, CustomLanguageConfig>) -> Result<Self> {
        let mut registry = Self::default();

        let mut tags: Vec<&String> = custom.keys().collect();
        tags.sort();

        for tag in tags {
            let config = &custom[tag];
            let mut rules = Vec::with_capacity(config.single_line.len() + config.multi_line.len());
            for pattern in &config.single_line {
                rules.push(CommentRule::single_line(pattern)?);
            }
            for pattern in &config.multi_line {
                rules.push(CommentRule::multi_line(pattern)?);
            }
            let name = config.name.clone().unwrap_or_else(|| tag.to_uppercase());
            registry.register(LanguageRuleSet::new(tag, &name, rules));
        }

        Ok(registry)
    }

    fn builtin(tag: &str, name: &str, single: &[&str], multi: &[&str]) -> LanguageRuleSet {
        let rules = single
            .iter()
            .map(|p| CommentRule::single_line(p))
            .chain(multi.iter().map(|p| CommentRule::multi_line(p)))
            .collect::<Result<Vec<_>>>()
            // SAFETY: built-in patterns are compile-time constants covered by tests
            .expect("built-in comment pattern");
        LanguageRuleSet::new(tag, name, rules)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(Self::builtin("cs", "C#", &[C_SINGLE], &[C_BLOCK]));
        registry.register(Self::builtin("ts", "TypeScript", &[C_SINGLE], &[C_BLOCK]));
        registry.register(Self::builtin(
            "tsx",
            "TypeScript (TSX)",
            &[C_SINGLE],
            &[JSX_BLOCK, C_BLOCK],
        ));
        registry.register(Self::builtin("js", "JavaScript", &[C_SINGLE], &[C_BLOCK]));
        registry.register(Self::builtin(
            "jsx",
            "JavaScript (JSX)",
            &[C_SINGLE],
            &[JSX_BLOCK, C_BLOCK],
        ));
        registry.register(Self::builtin("css", "CSS", &[], &[C_BLOCK]));
        registry.register(Self::builtin("scss", "SCSS", &[C_SINGLE], &[C_BLOCK]));
        registry.register(Self::builtin("html", "HTML", &[], &[MARKUP_BLOCK]));
        registry.register(Self::builtin("xml", "XML", &[], &[MARKUP_BLOCK]));
        registry.register(Self::builtin("xaml", "XAML", &[], &[MARKUP_BLOCK]));
        registry.register(Self::builtin("json", "JSON", &[], &[]));
        registry.register(Self::builtin(
            "py",
            "Python",
            &[HASH_SINGLE],
            &[PY_DOUBLE_DOCSTRING, PY_SINGLE_DOCSTRING],
        ));
        registry.register(Self::builtin("robot", "Robot Framework", &[HASH_SINGLE], &[]));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
