// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: gate, score, filter, sort.
//!
//! A linear scan over a few hundred items. [`SearchIndex`] only exists so
//! the normalized copy of every field is computed once per page session
//! instead of once per keystroke.
//!
//! # Ordering
//!
//! Results are sorted by tier alone, descending. `sort_by` is stable, so
//! items with the same tier keep their merge order (articles first, then
//! index entries). There is no secondary key, on purpose: the same query
//! over the same data always renders the same list.

use crate::config::DEFAULT_MIN_QUERY_CHARS;
use crate::scoring::{MatchTier, NormalizedFields};
use crate::types::{Corpus, SearchItem};
use crate::utils::{char_len, normalize};

/// A query that passed the minimum-length gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    normalized: String,
}

impl Query {
    /// Trim and normalize `raw`. Returns `None` when the normalized text has
    /// fewer than `min_chars` characters or is nothing but blanks; such
    /// queries never scan.
    pub fn parse(raw: &str, min_chars: usize) -> Option<Query> {
        let trimmed = raw.trim();
        let normalized = normalize(trimmed);
        if char_len(&normalized) < min_chars || normalized.trim().is_empty() {
            return None;
        }
        Some(Query {
            raw: trimmed.to_string(),
            normalized,
        })
    }

    /// The trimmed text as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// One matching item and the tier it matched at.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub item: &'a SearchItem,
    pub tier: MatchTier,
}

/// The merged items plus their pre-normalized fields.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    items: Vec<SearchItem>,
    fields: Vec<NormalizedFields>,
    min_query_chars: usize,
}

impl SearchIndex {
    pub fn new(items: Vec<SearchItem>) -> Self {
        let fields = items.iter().map(NormalizedFields::of).collect();
        Self {
            items,
            fields,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }

    pub fn from_corpus(corpus: Corpus) -> Self {
        Self::new(corpus.into_items())
    }

    /// Override the minimum query length (defaults to 2).
    pub fn with_min_query_chars(mut self, min_chars: usize) -> Self {
        self.min_query_chars = min_chars.max(1);
        self
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Matching items, best tier first.
    pub fn search(&self, raw_query: &str) -> Vec<&SearchItem> {
        self.search_hits(raw_query)
            .into_iter()
            .map(|hit| hit.item)
            .collect()
    }

    /// Like [`search`](Self::search), keeping the tier of each match.
    pub fn search_hits(&self, raw_query: &str) -> Vec<Hit<'_>> {
        match Query::parse(raw_query, self.min_query_chars) {
            Some(query) => self.run(&query),
            None => Vec::new(),
        }
    }

    /// Evaluate an already gated query.
    pub fn run(&self, query: &Query) -> Vec<Hit<'_>> {
        let q = query.normalized();
        let mut hits: Vec<Hit<'_>> = self
            .items
            .iter()
            .zip(&self.fields)
            .filter_map(|(item, fields)| fields.tier(q).map(|tier| Hit { item, tier }))
            .collect();

        hits.sort_by(|a, b| b.tier.cmp(&a.tier));
        hits
    }
}

/// One-shot search over a slice, for callers without a [`SearchIndex`].
pub fn search<'a>(items: &'a [SearchItem], raw_query: &str) -> Vec<&'a SearchItem> {
    let Some(query) = Query::parse(raw_query, DEFAULT_MIN_QUERY_CHARS) else {
        return Vec::new();
    };
    let q = query.normalized();
    let mut hits: Vec<(&SearchItem, MatchTier)> = items
        .iter()
        .filter_map(|item| NormalizedFields::of(item).tier(q).map(|tier| (item, tier)))
        .collect();
    hits.sort_by(|a, b| b.1.cmp(&a.1));
    hits.into_iter().map(|(item, _)| item).collect()
}
