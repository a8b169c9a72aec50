// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field-tier scoring.
//!
//! Which field matched decides the score, nothing else. No term frequency, no
//! position bonus: a title hit beats a tag hit beats a summary hit, and items
//! in the same tier keep their merge order.
//!
//! | Tier      | Score | Field(s) checked             |
//! |-----------|-------|------------------------------|
//! | `Title`   | 3     | title                        |
//! | `Tag`     | 2     | tags joined with spaces      |
//! | `Summary` | 1     | excerpt, then category label |
//! | none      | 0     | excluded from results        |

use crate::types::SearchItem;
use crate::utils::normalize;
use serde::Serialize;

/// The field a query matched in, ordered so that `Title > Tag > Summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum MatchTier {
    Summary = 1,
    Tag = 2,
    Title = 3,
}

impl MatchTier {
    #[inline]
    pub fn score(self) -> u8 {
        self as u8
    }
}

/// An item with every matchable field normalized once, up front.
///
/// Normalizing at load time instead of per keystroke gives the same answers
/// as normalizing on every comparison, because [`normalize`] is pure.
#[derive(Debug, Clone)]
pub struct NormalizedFields {
    pub title: String,
    pub tags: String,
    pub excerpt: String,
    pub category: String,
}

impl NormalizedFields {
    pub fn of(item: &SearchItem) -> Self {
        Self {
            title: normalize(&item.title),
            tags: normalize(&item.tags.join(" ")),
            excerpt: normalize(&item.excerpt),
            category: normalize(item.category.as_deref().unwrap_or("")),
        }
    }

    /// Highest tier whose field contains `query`, if any.
    ///
    /// `query` must already be normalized.
    pub fn tier(&self, query: &str) -> Option<MatchTier> {
        if self.title.contains(query) {
            Some(MatchTier::Title)
        } else if self.tags.contains(query) {
            Some(MatchTier::Tag)
        } else if self.excerpt.contains(query) || self.category.contains(query) {
            Some(MatchTier::Summary)
        } else {
            None
        }
    }
}

/// Score an item against an already normalized query: 3, 2, 1 or 0.
pub fn score(item: &SearchItem, normalized_query: &str) -> u8 {
    NormalizedFields::of(item)
        .tier(normalized_query)
        .map_or(0, MatchTier::score)
}
