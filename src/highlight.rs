// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query highlighting for display strings.
//!
//! Highlighting works on the raw query, not the normalized one: the user sees
//! `<mark>` around exactly what they typed, case-insensitively. Accent
//! folding is deliberately absent here, so "politica" finds "Política" in
//! search but marks nothing in the title. That matches the site's behavior.
//!
//! Matches are found in the raw display text and every piece is escaped on
//! its own. A query like `amp` can therefore never land inside `&amp;`.

use crate::config::DEFAULT_MIN_QUERY_CHARS;
use crate::utils::{char_len, escape_html};
use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Upper bound on compiled pattern size; absurd pastes fall back to plain text.
const PATTERN_SIZE_LIMIT: usize = 1 << 16;

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("invalid highlight pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Marks occurrences of the query in display text.
#[derive(Debug, Clone)]
pub enum Highlighter {
    /// Case-insensitive literal match of the trimmed query.
    Pattern(Regex),
    /// Query too short to highlight; text is only escaped.
    Passthrough,
}

impl Highlighter {
    /// Build a highlighter for `raw_query`.
    ///
    /// Queries whose trimmed form has fewer than `min_chars` characters give
    /// `Passthrough`. Compilation failure is returned, not swallowed; use
    /// [`for_query`](Self::for_query) when a fallback is wanted.
    pub fn compile(raw_query: &str, min_chars: usize) -> Result<Highlighter, HighlightError> {
        let trimmed = raw_query.trim();
        if trimmed.is_empty() || char_len(trimmed) < min_chars {
            return Ok(Highlighter::Passthrough);
        }

        let regex = RegexBuilder::new(&regex::escape(trimmed))
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()?;
        Ok(Highlighter::Pattern(regex))
    }

    /// Like [`compile`](Self::compile), falling back to `Passthrough` on any
    /// error.
    pub fn for_query(raw_query: &str, min_chars: usize) -> Highlighter {
        Self::compile(raw_query, min_chars).unwrap_or_else(|err| {
            log::debug!("highlighting disabled for this query: {}", err);
            Highlighter::Passthrough
        })
    }

    /// Escape `text` and wrap every match in `<mark>`.
    pub fn apply(&self, text: &str) -> String {
        let Highlighter::Pattern(regex) = self else {
            return escape_html(text);
        };

        let mut out = String::with_capacity(text.len() + 16);
        let mut last = 0;
        for m in regex.find_iter(text) {
            out.push_str(&escape_html(&text[last..m.start()]));
            out.push_str("<mark>");
            out.push_str(&escape_html(m.as_str()));
            out.push_str("</mark>");
            last = m.end();
        }
        out.push_str(&escape_html(&text[last..]));
        out
    }

    pub fn is_passthrough(&self) -> bool {
        matches!(self, Highlighter::Passthrough)
    }
}

/// Escape `text` and mark occurrences of `raw_query` in one call.
pub fn highlight(text: &str, raw_query: &str) -> String {
    Highlighter::for_query(raw_query, DEFAULT_MIN_QUERY_CHARS).apply(text)
}
