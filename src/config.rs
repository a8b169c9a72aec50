// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Overlay configuration.
//!
//! Every field has a default matching the site this was written for, so an
//! empty JSON object (`{}`) is a complete config. The same struct is read
//! from a file by the CLI and from a JS object by the WASM constructor.

use crate::error::{Error, Resource, Result};
use crate::types::{Permalinks, GROUP_INDICATORS, GROUP_PUBLICATIONS, GROUP_TEACHING};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default quiet period before a typed query is evaluated.
pub const DEFAULT_DEBOUNCE_MS: u64 = 120;

/// Queries shorter than this (after trim + normalize) never search.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Excerpts longer than this are cut and get a trailing ellipsis.
pub const DEFAULT_EXCERPT_CHARS: usize = 160;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Same-origin path of the generic content index.
    pub index_url: String,
    /// Same-origin path of the article feed.
    pub articles_url: String,
    /// Articles link to `permalink_prefix + slug + permalink_suffix`.
    pub permalink_prefix: String,
    pub permalink_suffix: String,
    /// Prepended to article ids so they can't collide with index ids.
    pub article_id_prefix: String,
    /// Group label given to every article.
    pub article_group: String,
    /// Render order of result groups. Groups not listed here are dropped
    /// unless `other_group` is set.
    pub group_order: Vec<String>,
    /// When set, results from unlisted groups render last under this label.
    pub other_group: Option<String>,
    pub min_query_chars: usize,
    pub debounce_ms: u64,
    pub excerpt_chars: usize,
    /// Elements matching this selector open the overlay on click.
    pub trigger_selector: String,
    /// Ctrl/Cmd + this key toggles the overlay from anywhere on the page.
    pub shortcut_key: String,
    pub messages: Messages,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_url: "/data/search-index.json".to_string(),
            articles_url: "/data/artigos.json".to_string(),
            permalink_prefix: "/publicacoes/".to_string(),
            permalink_suffix: ".html".to_string(),
            article_id_prefix: "artigo-".to_string(),
            article_group: GROUP_PUBLICATIONS.to_string(),
            group_order: vec![
                GROUP_PUBLICATIONS.to_string(),
                GROUP_TEACHING.to_string(),
                GROUP_INDICATORS.to_string(),
            ],
            other_group: None,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            trigger_selector: "#searchBtn, [data-search-trigger]".to_string(),
            shortcut_key: "k".to_string(),
            messages: Messages::default(),
        }
    }
}

/// User-facing strings of the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Messages {
    pub dialog_label: String,
    pub placeholder: String,
    pub prompt: String,
    pub loading: String,
    /// Followed by the quoted query.
    pub no_results: String,
    pub close_label: String,
    pub results_label: String,
    pub hint_close: String,
    pub hint_navigate: String,
    pub hint_open: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            dialog_label: "Buscar no site".to_string(),
            placeholder: "Buscar publicações, notas de aula, indicadores\u{2026}".to_string(),
            prompt: "Busque em publicações, notas de aula e indicadores".to_string(),
            loading: "Carregando\u{2026}".to_string(),
            no_results: "Nenhum resultado para".to_string(),
            close_label: "Fechar busca".to_string(),
            results_label: "Resultados da busca".to_string(),
            hint_close: "fechar".to_string(),
            hint_navigate: "navegar".to_string(),
            hint_open: "abrir".to_string(),
        }
    }
}

impl SearchConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SearchConfig =
            serde_json::from_str(raw).map_err(|e| Error::json(Resource::Config, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_query_chars == 0 {
            return Err(Error::Config("minQueryChars must be at least 1".into()));
        }
        if self.excerpt_chars == 0 {
            return Err(Error::Config("excerptChars must be at least 1".into()));
        }
        if self.shortcut_key.chars().count() != 1 {
            return Err(Error::Config(format!(
                "shortcutKey must be a single character, got {:?}",
                self.shortcut_key
            )));
        }
        Ok(())
    }

    pub fn permalinks(&self) -> Permalinks<'_> {
        Permalinks {
            prefix: &self.permalink_prefix,
            suffix: &self.permalink_suffix,
            id_prefix: &self.article_id_prefix,
            group: &self.article_group,
        }
    }
}
