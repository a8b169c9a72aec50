// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Data loading: parse the two JSON files and merge them into a [`Corpus`].
//!
//! In the browser the host fetches both files and hands the bytes over; on
//! the command line [`load_corpus`] reads them from a site directory. Both
//! paths end in [`Corpus::from_json`].
//!
//! Loading happens at most once per page session. [`LoadGuard`] is the
//! single flag that keeps a second open from starting a second fetch while
//! the first is still in flight, and that lets a failed load be retried.

use crate::config::SearchConfig;
use crate::error::{Error, Resource, Result};
use crate::types::{ArticleFeed, Corpus, SearchItem};
use std::collections::HashSet;

/// Parse the generic content index (an array of ready-made items).
pub fn parse_index(bytes: &[u8]) -> Result<Vec<SearchItem>> {
    serde_json::from_slice(bytes).map_err(|e| Error::json(Resource::ContentIndex, e))
}

/// Parse the article feed (`{ "artigos": [...] }`).
pub fn parse_articles(bytes: &[u8]) -> Result<ArticleFeed> {
    serde_json::from_slice(bytes).map_err(|e| Error::json(Resource::ArticleFeed, e))
}

impl Corpus {
    /// Merge the article feed and the content index.
    ///
    /// Articles come first, then index entries, each in source order. That
    /// order is the tie-break for equal scores, so it must stay stable.
    pub fn merge(feed: ArticleFeed, index: Vec<SearchItem>, config: &SearchConfig) -> Corpus {
        let links = config.permalinks();
        let mut items: Vec<SearchItem> = Vec::with_capacity(feed.articles.len() + index.len());
        items.extend(feed.articles.iter().map(|a| a.to_search_item(&links)));
        items.extend(index);

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                log::warn!("duplicate search item id {:?}", item.id);
            }
        }

        Corpus::new(items)
    }

    /// Parse both files and merge them.
    pub fn from_json(
        index_bytes: &[u8],
        articles_bytes: &[u8],
        config: &SearchConfig,
    ) -> Result<Corpus> {
        let index = parse_index(index_bytes)?;
        let feed = parse_articles(articles_bytes)?;
        let corpus = Corpus::merge(feed, index, config);
        log::debug!("loaded {} search items", corpus.len());
        Ok(corpus)
    }
}

// =============================================================================
// LOAD GUARD
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    /// A fetch is still in flight but its session was torn down; its result
    /// will be discarded.
    Orphaned,
    Loaded,
}

/// Tracks whether the corpus is absent, being fetched, or ready.
///
/// ```text
/// NotLoaded ──begin──▶ Loading ──finish_ok──▶ Loaded
///     ▲                │    ▲  │
///     ├───finish_err───┘    │  │ orphan
///     │                 begin  ▼
///     └────finish_*─────── Orphaned
/// ```
///
/// `begin` from `Orphaned` adopts the in-flight fetch for the new session
/// instead of starting another, so there is never more than one fetch.
#[derive(Debug, Clone, Default)]
pub struct LoadGuard {
    state: LoadState,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the right to fetch. Only the first caller from `NotLoaded` wins.
    pub fn begin(&mut self) -> bool {
        match self.state {
            LoadState::NotLoaded => {
                self.state = LoadState::Loading;
                true
            }
            LoadState::Orphaned => {
                self.state = LoadState::Loading;
                false
            }
            LoadState::Loading | LoadState::Loaded => false,
        }
    }

    /// Record a successful load. Returns `false` when the result belongs to
    /// a torn-down session and must be dropped.
    pub fn finish_ok(&mut self) -> bool {
        if self.state == LoadState::Orphaned {
            self.state = LoadState::NotLoaded;
            return false;
        }
        self.state = LoadState::Loaded;
        true
    }

    /// Back to `NotLoaded` so the next open retries. Returns `false` for an
    /// orphaned load, like [`finish_ok`](Self::finish_ok).
    pub fn finish_err(&mut self) -> bool {
        let current = self.state != LoadState::Orphaned;
        self.state = LoadState::NotLoaded;
        current
    }

    /// Forget the data. An in-flight fetch becomes `Orphaned` instead of
    /// being forgotten, so its completion can still be recognized.
    pub fn orphan(&mut self) {
        self.state = match self.state {
            LoadState::Loading | LoadState::Orphaned => LoadState::Orphaned,
            LoadState::NotLoaded | LoadState::Loaded => LoadState::NotLoaded,
        };
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }
}

// =============================================================================
// NATIVE SOURCES
// =============================================================================

/// Somewhere the two data files can be read from.
#[cfg(feature = "native")]
pub trait Source {
    /// Read the resource at a site-absolute path like `/data/artigos.json`.
    fn read(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>>;
}

/// Reads site paths below a directory on disk.
#[cfg(feature = "native")]
#[derive(Debug, Clone)]
pub struct DirSource {
    root: std::path::PathBuf,
}

#[cfg(feature = "native")]
impl DirSource {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, path: &str) -> std::path::PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[cfg(feature = "native")]
impl Source for DirSource {
    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.resolve(path);
        tokio::fs::read(&full)
            .await
            .map_err(|source| Error::Io { path: full, source })
    }
}

/// Read both files concurrently and merge them.
#[cfg(feature = "native")]
pub async fn load_corpus<S: Source>(source: &S, config: &SearchConfig) -> Result<Corpus> {
    let (index_bytes, articles_bytes) = tokio::try_join!(
        source.read(&config.index_url),
        source.read(&config.articles_url)
    )?;
    Corpus::from_json(&index_bytes, &articles_bytes, config)
}
