/*!
 * Case-preserving whole-word substitution.
 *
 * This module contains the engine that applies an ordered list of
 * translation rules to a piece of text. It is split into:
 *
 * - `casing`: casing classes of matched words and how they are carried over
 * - `engine`: rule compilation and sequential application
 */

// Re-export main types for easier usage
pub use self::casing::{CaseClass, title_case};
pub use self::engine::{MatchMode, SubstitutionEngine, SubstitutionReport, TranslationRule, apply};

// Submodules
pub mod casing;
pub mod engine;
