/*!
 * Sequential rule application.
 *
 * Rules are applied in list order and each rule sees the output of the
 * previous one, so a replacement can be matched again by a later rule.
 */

use std::borrow::Cow;

use log::{debug, trace};
use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::errors::SubstitutionError;
use crate::substitution::casing::CaseClass;

/// One ordered (old word, new word) pair
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRule {
    /// Word (or pattern) to look for
    #[serde(default)]
    pub old_word: String,

    /// Word inserted in its place
    #[serde(default)]
    pub new_word: String,
}

impl TranslationRule {
    pub fn new(old_word: impl Into<String>, new_word: impl Into<String>) -> Self {
        Self {
            old_word: old_word.into(),
            new_word: new_word.into(),
        }
    }
}

/// How the old word of a rule is turned into a matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Old word is used as a regular expression fragment, unescaped
    #[default]
    Pattern,
    /// Old word is escaped and matched literally
    Literal,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern => write!(f, "pattern"),
            Self::Literal => write!(f, "literal"),
        }
    }
}

/// Output of a full run together with per-rule match counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// Text after every rule has been applied
    pub output: String,

    /// Number of replacements made by each rule, in rule order
    pub rule_matches: Vec<usize>,
}

impl SubstitutionReport {
    pub fn total_matches(&self) -> usize {
        self.rule_matches.iter().sum()
    }
}

/// Applies translation rules to text
#[derive(Debug, Clone, Default)]
pub struct SubstitutionEngine {
    mode: MatchMode,
}

impl SubstitutionEngine {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Build the whole-word, case-insensitive matcher for an old word
    pub fn matcher_for(&self, old_word: &str) -> Result<Regex, regex::Error> {
        let body = match self.mode {
            MatchMode::Pattern => Cow::Borrowed(old_word),
            MatchMode::Literal => Cow::Owned(regex::escape(old_word)),
        };

        RegexBuilder::new(&format!(r"\b(?:{})\b", body))
            .case_insensitive(true)
            .build()
    }

    /// Check that the rule at `index` compiles under the current mode
    pub fn check_rule(&self, index: usize, rule: &TranslationRule) -> Result<(), SubstitutionError> {
        self.compile(index, rule).map(|_| ())
    }

    fn compile(&self, index: usize, rule: &TranslationRule) -> Result<Regex, SubstitutionError> {
        self.matcher_for(&rule.old_word)
            .map_err(|e| SubstitutionError::InvalidPattern {
                index,
                pattern: rule.old_word.clone(),
                reason: e.to_string(),
            })
    }

    /// Apply every rule in order and return the resulting text
    pub fn apply(&self, content: &str, rules: &[TranslationRule]) -> Result<String, SubstitutionError> {
        Ok(self.apply_with_report(content, rules)?.output)
    }

    /// Apply every rule in order, counting replacements per rule
    pub fn apply_with_report(
        &self,
        content: &str,
        rules: &[TranslationRule],
    ) -> Result<SubstitutionReport, SubstitutionError> {
        let mut current = content.to_string();
        let mut rule_matches = Vec::with_capacity(rules.len());

        for (index, rule) in rules.iter().enumerate() {
            let matcher = self.compile(index, rule)?;

            let mut count = 0usize;
            let replaced = matcher
                .replace_all(&current, |caps: &Captures| {
                    count += 1;
                    let matched = &caps[0];
                    let class = CaseClass::of(matched);
                    trace!("'{}' is {:?}", matched, class);
                    class.apply(&rule.new_word)
                })
                .into_owned();

            debug!(
                "Rule {} '{}' -> '{}': {} replacement(s)",
                index, rule.old_word, rule.new_word, count
            );

            current = replaced;
            rule_matches.push(count);
        }

        Ok(SubstitutionReport {
            output: current,
            rule_matches,
        })
    }
}

/// Apply rules with the default engine (pattern mode)
pub fn apply(content: &str, rules: &[TranslationRule]) -> Result<String, SubstitutionError> {
    SubstitutionEngine::with_defaults().apply(content, rules)
}
