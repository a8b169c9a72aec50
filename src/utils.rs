// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip diacritics, and blank out
/// everything that isn't `[a-z0-9 ]`.
///
/// Matching is accent- and punctuation-insensitive on purpose:
/// - "Política" → "politica"
/// - "Relatório-Anual" → "relatorio anual"
/// - "IPCA (12m)" → "ipca  12m "
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. NFD normalize (decompose characters into base + combining marks)
/// 3. Drop combining diacritical marks (U+0300..U+036F)
/// 4. Replace every remaining char outside `[a-z0-9 ]` with a single space
///
/// Whitespace is not collapsed, so byte offsets in the output line up with
/// what the user typed. The output only contains `[a-z0-9 ]`, which makes
/// the function idempotent.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'a'..='z' | '0'..='9' | ' ' => c,
            _ => ' ',
        })
        .collect()
}

/// Check if a character is a combining diacritical mark.
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// Escape text for embedding in HTML element content or a quoted attribute.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Number of characters (not bytes) in a string.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
