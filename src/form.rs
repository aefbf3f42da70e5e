/*!
 * Translate form model.
 *
 * Holds the content field and the dynamic list of translation rules,
 * validates them, and runs the substitution engine on submit.
 */

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, FieldError, ValidationErrors};
use crate::substitution::{SubstitutionEngine, TranslationRule};

pub const CONTENT_REQUIRED: &str = "Content is required";
pub const OLD_WORD_REQUIRED: &str = "Old word is required";
pub const NEW_WORD_REQUIRED: &str = "New word is required";
pub const TRANSLATIONS_REQUIRED: &str = "At least one translation is required";

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    /// Translated content
    pub content: String,

    /// Replacements made by each rule, in rule order
    pub rule_matches: Vec<usize>,
}

impl TranslationResult {
    pub fn total_matches(&self) -> usize {
        self.rule_matches.iter().sum()
    }
}

/// Content plus an ordered, growable list of rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub translations: Vec<TranslationRule>,
}

impl Default for TranslateForm {
    /// Empty content and a single blank rule pair
    fn default() -> Self {
        Self {
            content: String::new(),
            translations: vec![TranslationRule::default()],
        }
    }
}

impl TranslateForm {
    pub fn new(content: impl Into<String>, translations: Vec<TranslationRule>) -> Self {
        Self {
            content: content.into(),
            translations,
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn append(&mut self, rule: TranslationRule) {
        self.translations.push(rule);
    }

    /// Append a blank pair, as the "Add Word" button does
    pub fn append_empty(&mut self) {
        self.translations.push(TranslationRule::default());
    }

    /// Remove the pair at `index`; out-of-range indices are ignored
    pub fn remove(&mut self, index: usize) -> Option<TranslationRule> {
        if index < self.translations.len() {
            Some(self.translations.remove(index))
        } else {
            None
        }
    }

    /// Overwrite the pair at `index`. Returns false when out of range.
    pub fn update(&mut self, index: usize, old_word: impl Into<String>, new_word: impl Into<String>) -> bool {
        match self.translations.get_mut(index) {
            Some(rule) => {
                rule.old_word = old_word.into();
                rule.new_word = new_word.into();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Check every field, collecting all failures instead of stopping at the first.
    ///
    /// Old words are also compiled with `engine` so a rule that cannot be
    /// matched is reported on its own field.
    pub fn validate(&self, engine: &SubstitutionEngine) -> Result<(), ValidationErrors> {
        let mut fields = Vec::new();

        if self.content.is_empty() {
            fields.push(FieldError::new("content", CONTENT_REQUIRED));
        }

        if self.translations.is_empty() {
            fields.push(FieldError::new("translations", TRANSLATIONS_REQUIRED));
        }

        for (index, rule) in self.translations.iter().enumerate() {
            let old_path = format!("translations.{}.oldWord", index);
            if rule.old_word.is_empty() {
                fields.push(FieldError::new(old_path, OLD_WORD_REQUIRED));
            } else if let Err(e) = engine.matcher_for(&rule.old_word) {
                fields.push(FieldError::new(
                    old_path,
                    format!("Old word is not a valid pattern: {}", summary_line(&e.to_string())),
                ));
            }

            if rule.new_word.is_empty() {
                fields.push(FieldError::new(format!("translations.{}.newWord", index), NEW_WORD_REQUIRED));
            }
        }

        if fields.is_empty() {
            Ok(())
        } else {
            debug!("Form rejected with {} field error(s)", fields.len());
            Err(ValidationErrors { fields })
        }
    }

    /// Validate, then apply every rule to the content
    pub fn submit(&self, engine: &SubstitutionEngine) -> Result<TranslationResult, AppError> {
        self.validate(engine)?;

        let report = engine.apply_with_report(&self.content, &self.translations)?;
        info!(
            "Applied {} rule(s), {} replacement(s)",
            self.translations.len(),
            report.total_matches()
        );

        Ok(TranslationResult {
            content: report.output,
            rule_matches: report.rule_matches,
        })
    }
}

// regex errors render a multi-line caret diagram; the summary is on the last line
fn summary_line(message: &str) -> &str {
    message
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or(message)
        .trim()
}
