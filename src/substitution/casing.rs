/*!
 * Casing classes for matched words.
 *
 * A matched occurrence is classified as fully upper-case, title-case or
 * anything else, and the replacement word is re-cased to the same class.
 */

/// Casing pattern of a matched occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseClass {
    /// Equal to its own upper-case form (`HELLO`, `A`, `42`)
    Upper,
    /// First letter upper-case, remainder lower-case (`Hello`)
    Title,
    /// Anything else (`hello`, `hELLo`)
    Other,
}

impl CaseClass {
    /// Classify a matched occurrence.
    ///
    /// The upper-case check runs first, so a single upper-case letter is
    /// `Upper` even though it is also title-cased.
    pub fn of(matched: &str) -> Self {
        if matched == matched.to_uppercase() {
            Self::Upper
        } else if matched == title_case(matched) {
            Self::Title
        } else {
            Self::Other
        }
    }

    /// Re-case a replacement word to this class
    pub fn apply(self, word: &str) -> String {
        match self {
            Self::Upper => word.to_uppercase(),
            Self::Title => title_case(word),
            Self::Other => word.to_lowercase(),
        }
    }
}

/// First character upper-cased, the rest lower-cased
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result: String = first.to_uppercase().collect();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}
