//! Accent-insensitive search overlay for static sites.
//!
//! A static site publishes two JSON files, a generic content index and an
//! article feed. This crate merges them into one item list, answers queries
//! with a small field-tier substring engine, and drives the search dialog as
//! a DOM-free state machine. The browser only runs a thin shim that executes
//! the [`Effect`]s the overlay hands back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  loader.rs  │────▶│  search.rs   │────▶│  render.rs   │
//! │ (Corpus,    │     │ (Query,      │     │ (Panel,      │
//! │  LoadGuard) │     │  SearchIndex)│     │  GroupOrder) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     overlay.rs                       │
//! │  (Overlay state machine, Debouncer, Effect list)     │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!                 wasm.rs  /  main.rs (CLI)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use lupa::{Corpus, SearchConfig, SearchIndex};
//!
//! let config = SearchConfig::default();
//! let corpus = Corpus::from_json(index_json, articles_json, &config)?;
//! let index = SearchIndex::from_corpus(corpus);
//!
//! for item in index.search("politica") {
//!     println!("{} -> {}", item.title, item.url);
//! }
//! ```

// Module declarations
pub mod config;
pub mod debounce;
mod error;
pub mod highlight;
pub mod loader;
pub mod overlay;
pub mod render;
mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{Messages, SearchConfig};
pub use debounce::Debouncer;
pub use error::{Error, Resource, Result};
pub use highlight::{highlight, HighlightError, Highlighter};
pub use loader::{parse_articles, parse_index, LoadGuard, LoadState};
#[cfg(feature = "native")]
pub use loader::{load_corpus, DirSource, Source};
pub use overlay::{Effect, KeyPress, Overlay, OverlayState};
pub use render::{group_items, overlay_markup, truncate_excerpt, GroupOrder, Panel, ResultGroup, ResultRow};
pub use scoring::{score, MatchTier};
pub use search::{search, Hit, Query, SearchIndex};
pub use types::{
    ArticleFeed, ArticleId, ArticleRecord, Corpus, Permalinks, SearchItem, GROUP_INDICATORS,
    GROUP_PUBLICATIONS, GROUP_TEACHING,
};
pub use utils::{escape_html, normalize};

#[cfg(feature = "wasm")]
pub use wasm::SiteSearch;
