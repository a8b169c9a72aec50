// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shapes that flow through the overlay.
//!
//! Two JSON files feed the search: a generic content index whose entries are
//! already [`SearchItem`]s, and an article feed whose [`ArticleRecord`]s get
//! mapped 1:1 into the same shape. Both files were written by hand for a
//! Portuguese site, so every field accepts the original Portuguese key as an
//! alias next to the camelCase English one.
//!
//! # Invariants
//!
//! - **SearchItem**: `title` and `url` are always present. `excerpt` is the
//!   empty string when the source had none, never absent.
//! - **Corpus**: immutable once built. Scoring reads it, nothing writes it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Group label for articles coming from the article feed.
pub const GROUP_PUBLICATIONS: &str = "Publicações";

/// Group label for teaching notes in the generic index.
pub const GROUP_TEACHING: &str = "Ensino";

/// Group label for economic indicators in the generic index.
pub const GROUP_INDICATORS: &str = "Indicadores";

// =============================================================================
// SEARCH ITEM
// =============================================================================

/// One searchable entry, whatever file it came from.
///
/// `group` decides where the row renders (and whether it renders at all, see
/// [`crate::render::GroupOrder`]). `category` is the section label shown as a
/// badge and matched at the lowest score tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub id: String,
    #[serde(alias = "tipo")]
    pub group: String,
    #[serde(default, alias = "secaoLabel", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(default, alias = "resumo")]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: String,
    #[serde(
        default,
        alias = "dataFormatada",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_date: Option<String>,
}

// =============================================================================
// ARTICLE FEED
// =============================================================================

/// Article identifiers are numbers in older feeds and strings in newer ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Number(n) => write!(f, "{}", n),
            ArticleId::Text(s) => f.write_str(s),
        }
    }
}

/// One article as published in the article feed.
///
/// The feed carries many more fields (author, body, image); serde ignores
/// whatever isn't listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub id: ArticleId,
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(default, alias = "subtitulo")]
    pub subtitle: Option<String>,
    #[serde(default, alias = "resumo")]
    pub summary: Option<String>,
    #[serde(default, alias = "categoria")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub slug: String,
    #[serde(default, alias = "dataFormatada")]
    pub display_date: Option<String>,
}

/// Top-level object of the article feed: `{ "artigos": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFeed {
    #[serde(default, alias = "artigos")]
    pub articles: Vec<ArticleRecord>,
}

/// How article slugs become links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permalinks<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
    pub id_prefix: &'a str,
    pub group: &'a str,
}

impl ArticleRecord {
    /// Map this article into the common search shape.
    ///
    /// The excerpt is the first non-empty of subtitle and summary. Empty
    /// strings count as missing everywhere, matching how the feed is edited.
    pub fn to_search_item(&self, links: &Permalinks<'_>) -> SearchItem {
        let excerpt = non_empty(&self.subtitle)
            .or_else(|| non_empty(&self.summary))
            .unwrap_or_default()
            .to_string();

        SearchItem {
            id: format!("{}{}", links.id_prefix, self.id),
            group: links.group.to_string(),
            category: non_empty(&self.category).map(str::to_string),
            title: self.title.clone(),
            excerpt,
            tags: self.tags.clone(),
            url: format!("{}{}{}", links.prefix, self.slug, links.suffix),
            display_date: non_empty(&self.display_date).map(str::to_string),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// =============================================================================
// CORPUS
// =============================================================================

/// The merged, immutable item list for one page session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corpus {
    items: Vec<SearchItem>,
}

impl Corpus {
    pub fn new(items: Vec<SearchItem>) -> Self {
        Corpus { items }
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

    pub fn into_items(self) -> Vec<SearchItem> {
        self.items
    }
}
