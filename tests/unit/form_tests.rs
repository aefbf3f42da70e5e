/*!
 * Tests for the translate form model
 */

use wordswap::form::{
    TranslateForm, CONTENT_REQUIRED, NEW_WORD_REQUIRED, OLD_WORD_REQUIRED,
};
use wordswap::{AppError, SubstitutionEngine, TranslationRule};
use crate::common::rule;

#[test]
fn test_form_appendEmpty_shouldAddBlankPair() {
    let mut form = TranslateForm::default();
    form.append_empty();
    assert_eq!(form.len(), 2);
    assert!(form.translations.iter().all(|r| *r == TranslationRule::default()));
}

#[test]
fn test_form_removeAll_shouldLeaveEmptyList() {
    let mut form = TranslateForm::default();
    assert!(form.remove(0).is_some());
    assert!(form.is_empty());
    assert!(form.remove(0).is_none());
}

#[test]
fn test_form_validate_missingNewWordOnly_shouldReportThatField() {
    let form = TranslateForm::new("text", vec![rule("a", "b"), rule("c", "")]);
    let errors = form.validate(&SubstitutionEngine::with_defaults()).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message_for("translations.1.newWord"), Some(NEW_WORD_REQUIRED));
    assert_eq!(errors.message_for("translations.0.newWord"), None);
}

#[test]
fn test_form_validate_emptyContentAndOldWord_shouldReportBoth() {
    let form = TranslateForm::new("", vec![rule("", "b")]);
    let errors = form.validate(&SubstitutionEngine::with_defaults()).unwrap_err();

    assert_eq!(errors.message_for("content"), Some(CONTENT_REQUIRED));
    assert_eq!(errors.message_for("translations.0.oldWord"), Some(OLD_WORD_REQUIRED));
}

#[test]
fn test_form_validate_whitespaceContent_shouldBeAccepted() {
    let form = TranslateForm::new(" ", vec![rule("a", "b")]);
    assert!(form.validate(&SubstitutionEngine::with_defaults()).is_ok());
}

#[test]
fn test_form_submit_shouldNotMutateForm() {
    let form = TranslateForm::new("Hello", vec![rule("hello", "hi")]);
    let engine = SubstitutionEngine::with_defaults();

    let first = form.submit(&engine).unwrap();
    let second = form.submit(&engine).unwrap();

    assert_eq!(first, second);
    assert_eq!(form.content, "Hello");
}

#[test]
fn test_form_submit_withInvalidPattern_shouldFailValidation() {
    let form = TranslateForm::new("text", vec![rule("a(", "b")]);
    let result = form.submit(&SubstitutionEngine::with_defaults());

    match result {
        Err(AppError::Validation(errors)) => {
            assert!(errors.message_for("translations.0.oldWord").is_some());
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_form_deserialize_shouldUseOriginalFieldNames() {
    let json = r#"{"content":"Hi","translations":[{"oldWord":"hi","newWord":"hey"}]}"#;
    let form: TranslateForm = serde_json::from_str(json).unwrap();
    assert_eq!(form.translations, vec![rule("hi", "hey")]);
}
