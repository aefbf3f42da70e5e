/*!
 * # wordswap - ordered, case-preserving word substitution
 *
 * A Rust library for replacing whole words in a piece of text according to
 * an ordered list of translation rules, carrying the casing of each matched
 * word over to its replacement.
 *
 * ## Features
 *
 * - Whole-word, case-insensitive matching
 * - Upper-case, title-case and lower-case preservation
 * - Sequential rules: each rule sees the previous rule's output
 * - Pattern or literal interpretation of the old word
 * - Form model with per-field validation
 * - Best-effort clipboard copy of the result
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `substitution`: The substitution engine:
 *   - `substitution::casing`: Casing classes
 *   - `substitution::engine`: Rule compilation and application
 * - `form`: Content + rule list, validation and submit
 * - `clipboard`: Clipboard sinks and copy notices
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod clipboard;
pub mod errors;
pub mod file_utils;
pub mod form;
pub mod substitution;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ClipboardError, FieldError, SubstitutionError, ValidationErrors};
pub use form::{TranslateForm, TranslationResult};
pub use substitution::{apply, CaseClass, MatchMode, SubstitutionEngine, TranslationRule};
