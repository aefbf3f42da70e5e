/*!
 * Tests for error types and conversions
 */

use wordswap::errors::{AppError, ClipboardError, FieldError, SubstitutionError, ValidationErrors};

#[test]
fn test_validationErrors_display_shouldListEveryField() {
    let errors = ValidationErrors {
        fields: vec![
            FieldError::new("content", "Content is required"),
            FieldError::new("translations.0.newWord", "New word is required"),
        ],
    };
    let display = format!("{}", errors);
    assert!(display.starts_with("Validation failed"));
    assert!(display.contains("content: Content is required"));
    assert!(display.contains("translations.0.newWord: New word is required"));
}

#[test]
fn test_substitutionError_invalidPattern_shouldDisplayIndexAndPattern() {
    let error = SubstitutionError::InvalidPattern {
        index: 2,
        pattern: "(".to_string(),
        reason: "unclosed group".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("Rule 2"));
    assert!(display.contains("'('"));
    assert!(display.contains("unclosed group"));
}

#[test]
fn test_clipboardError_shouldDisplayCorrectly() {
    let error = ClipboardError::Unavailable("no display".to_string());
    assert_eq!(format!("{}", error), "Clipboard unavailable: no display");
}

#[test]
fn test_appError_fromValidationErrors_shouldBeTransparent() {
    let errors = ValidationErrors {
        fields: vec![FieldError::new("content", "Content is required")],
    };
    let app_error: AppError = errors.clone().into();
    assert_eq!(format!("{}", app_error), format!("{}", errors));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
    let app_error: AppError = io_error.into();
    match app_error {
        AppError::File(message) => assert!(message.contains("missing.txt")),
        other => panic!("expected file error, got {:?}", other),
    }
}

#[test]
fn test_appError_fromAnyhow_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("boom").into();
    assert_eq!(format!("{}", app_error), "Unknown error: boom");
}
