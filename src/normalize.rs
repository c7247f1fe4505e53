// src/normalize.rs

//! Name normalization
//!
//! Turns handwritten, free-form text into a canonical display name:
//! word separators become spaces, anything that is not an ASCII letter is
//! dropped, whitespace is collapsed and each word is title-cased.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]").unwrap());
static NON_LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z ]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a raw name into its canonical form
///
/// # Examples
/// ```
/// use cookbook::normalize_name;
///
/// assert_eq!(normalize_name("Mapo-Tofu").unwrap(), "Mapo Tofu");
/// assert_eq!(normalize_name("  ##Fried_Rice__").unwrap(), "Fried Rice");
/// assert!(normalize_name("---").is_err());
/// ```
pub fn normalize_name(raw: &str) -> Result<String> {
    let spaced = SEPARATORS.replace_all(raw, " ");
    let letters = NON_LETTERS.replace_all(&spaced, "");
    let collapsed = WHITESPACE.replace_all(&letters, " ");
    let trimmed = collapsed.trim();

    if trimmed.is_empty() {
        return Err(Error::InvalidNormalizationInput(raw.to_string()));
    }

    Ok(trimmed.split(' ').map(title_case).collect::<Vec<_>>().join(" "))
}

/// Upper-case the first letter, lower-case the rest
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
        }
        None => String::new(),
    }
}
