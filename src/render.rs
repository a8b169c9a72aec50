// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning search results into overlay markup.
//!
//! Everything here is a pure function of (items, query, config). The
//! overlay keeps the last [`Panel`] it built so keyboard navigation can map a
//! focused row index back to a URL without asking the DOM.
//!
//! # Group order
//!
//! Results render in a fixed group order, not by match volume. A group
//! missing from that order has no slot, so its results vanish unless the
//! config names an `otherGroup` bucket:
//!
//! ```text
//! order = [Publicações, Ensino, Indicadores]
//! hits  = [Indicadores#1, Ensino#1, Blog#1, Ensino#2]
//!
//! Ensino       ── row 0: Ensino#1
//!                 row 1: Ensino#2
//! Indicadores  ── row 2: Indicadores#1
//! (Blog#1 dropped)
//! ```

use crate::config::{Messages, SearchConfig};
use crate::highlight::Highlighter;
use crate::types::SearchItem;
use crate::utils::escape_html;
use serde::Serialize;

const ELLIPSIS: char = '\u{2026}';

/// Cut `text` to `limit` characters, appending `…` when anything was cut.
pub fn truncate_excerpt(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => {
            let mut cut = text[..byte_idx].to_string();
            cut.push(ELLIPSIS);
            cut
        }
        None => text.to_string(),
    }
}

// =============================================================================
// GROUPING
// =============================================================================

/// Fixed render order of result groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOrder {
    labels: Vec<String>,
    other: Option<String>,
}

impl GroupOrder {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            other: None,
        }
    }

    /// Collect unlisted groups under `label`, rendered after the listed ones.
    pub fn with_other(mut self, label: impl Into<String>) -> Self {
        self.other = Some(label.into());
        self
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            labels: config.group_order.clone(),
            other: config.other_group.clone(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Bucket `items` by group, in `order`. Item order within a bucket is kept.
///
/// Empty buckets are skipped, so there is never a header without rows.
pub fn group_items<'a, 'o>(
    items: &[&'a SearchItem],
    order: &'o GroupOrder,
) -> Vec<(&'o str, Vec<&'a SearchItem>)> {
    let mut groups: Vec<(&'o str, Vec<&'a SearchItem>)> = order
        .labels
        .iter()
        .map(|label| {
            let members = items
                .iter()
                .copied()
                .filter(|item| item.group == *label)
                .collect();
            (label.as_str(), members)
        })
        .collect();

    if let Some(other) = &order.other {
        let unlisted = items
            .iter()
            .copied()
            .filter(|item| !order.labels.contains(&item.group))
            .collect();
        groups.push((other.as_str(), unlisted));
    }

    groups.retain(|(_, members)| !members.is_empty());
    groups
}

// =============================================================================
// RENDER TREE
// =============================================================================

/// One clickable result row. All `*_html` fields are already escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    /// Position among all rendered rows, across groups.
    pub index: usize,
    pub id: String,
    pub url: String,
    pub title_html: String,
    pub badge: Option<String>,
    pub date: Option<String>,
    pub excerpt_html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultGroup {
    pub label: String,
    pub rows: Vec<ResultRow>,
}

/// What the results area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Panel {
    /// Nothing (or too little) typed yet.
    Prompt,
    /// A query was typed before the data arrived.
    Loading,
    NoResults { query: String },
    Results { groups: Vec<ResultGroup> },
}

impl Panel {
    /// Build the panel for a finished search.
    ///
    /// `raw_query` is the text as typed; it drives highlighting and the
    /// no-results message.
    pub fn build(items: &[&SearchItem], raw_query: &str, config: &SearchConfig) -> Panel {
        if items.is_empty() {
            return Panel::NoResults {
                query: raw_query.trim().to_string(),
            };
        }

        let order = GroupOrder::from_config(config);
        let highlighter = Highlighter::for_query(raw_query, config.min_query_chars);
        let mut next_index = 0;

        let groups = group_items(items, &order)
            .into_iter()
            .map(|(label, members)| ResultGroup {
                label: label.to_string(),
                rows: members
                    .into_iter()
                    .map(|item| {
                        let row = build_row(item, next_index, &highlighter, config.excerpt_chars);
                        next_index += 1;
                        row
                    })
                    .collect(),
            })
            .collect();

        Panel::Results { groups }
    }

    /// Number of rendered rows (0 for every non-results panel).
    pub fn row_count(&self) -> usize {
        match self {
            Panel::Results { groups } => groups.iter().map(|g| g.rows.len()).sum(),
            _ => 0,
        }
    }

    pub fn row(&self, index: usize) -> Option<&ResultRow> {
        match self {
            Panel::Results { groups } => groups.iter().flat_map(|g| &g.rows).nth(index),
            _ => None,
        }
    }

    /// Group labels in render order.
    pub fn group_labels(&self) -> Vec<&str> {
        match self {
            Panel::Results { groups } => groups.iter().map(|g| g.label.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Markup for the results area.
    pub fn to_html(&self, messages: &Messages) -> String {
        match self {
            Panel::Prompt => empty_state(&escape_html(&messages.prompt)),
            Panel::Loading => empty_state(&escape_html(&messages.loading)),
            Panel::NoResults { query } => empty_state(&format!(
                "{} <strong>\"{}\"</strong>",
                escape_html(&messages.no_results),
                escape_html(query)
            )),
            Panel::Results { groups } => {
                let mut html = String::new();
                for group in groups {
                    html.push_str("<div class=\"srch-group-header\">");
                    html.push_str(&escape_html(&group.label));
                    html.push_str("</div>");
                    for row in &group.rows {
                        html.push_str(&row.to_html());
                    }
                }
                html
            }
        }
    }
}

fn build_row(
    item: &SearchItem,
    index: usize,
    highlighter: &Highlighter,
    excerpt_chars: usize,
) -> ResultRow {
    let excerpt = truncate_excerpt(&item.excerpt, excerpt_chars);
    ResultRow {
        index,
        id: item.id.clone(),
        url: item.url.clone(),
        title_html: highlighter.apply(&item.title),
        badge: item
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(escape_html),
        date: item
            .display_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(escape_html),
        excerpt_html: (!excerpt.is_empty()).then(|| highlighter.apply(&excerpt)),
    }
}

impl ResultRow {
    pub fn to_html(&self) -> String {
        let badge = self
            .badge
            .as_ref()
            .map(|b| format!("<span class=\"srch-badge\">{}</span>", b))
            .unwrap_or_default();
        let date = self
            .date
            .as_ref()
            .map(|d| format!("<span class=\"srch-date\">{}</span>", d))
            .unwrap_or_default();
        let excerpt = self
            .excerpt_html
            .as_ref()
            .map(|e| format!("<div class=\"srch-result-excerpt\">{}</div>", e))
            .unwrap_or_default();

        format!(
            "<a href=\"{}\" class=\"srch-result\" role=\"option\" data-index=\"{}\">\
             <div class=\"srch-result-title\">{}</div>\
             <div class=\"srch-result-meta\">{}{}</div>\
             {}</a>",
            escape_html(&self.url),
            self.index,
            self.title_html,
            badge,
            date,
            excerpt
        )
    }
}

fn empty_state(inner: &str) -> String {
    format!("<div class=\"srch-empty\"><p>{}</p></div>", inner)
}

/// The overlay dialog, injected into the page once on first open.
pub fn overlay_markup(messages: &Messages) -> String {
    format!(
        r#"<div class="srch-overlay" id="srchOverlay" role="dialog" aria-modal="true" aria-label="{dialog}">
  <div class="srch-container">
    <div class="srch-input-row">
      <svg class="srch-icon" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
        <circle cx="11" cy="11" r="8"></circle>
        <path d="m21 21-4.35-4.35"></path>
      </svg>
      <input class="srch-input" id="srchInput" type="search" placeholder="{placeholder}" autocomplete="off" autocorrect="off" autocapitalize="off" spellcheck="false" />
      <button class="srch-close" id="srchClose" aria-label="{close}">
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
          <path d="M18 6L6 18M6 6l12 12"/>
        </svg>
      </button>
    </div>
    <div class="srch-results" id="srchResults" role="listbox" aria-label="{results}"></div>
    <div class="srch-footer">
      <span class="srch-hint"><kbd class="srch-kbd">Esc</kbd> {hint_close}</span>
      <span class="srch-hint"><kbd class="srch-kbd">&#8593;&#8595;</kbd> {hint_navigate}</span>
      <span class="srch-hint"><kbd class="srch-kbd">&#8629;</kbd> {hint_open}</span>
    </div>
  </div>
</div>"#,
        dialog = escape_html(&messages.dialog_label),
        placeholder = escape_html(&messages.placeholder),
        close = escape_html(&messages.close_label),
        results = escape_html(&messages.results_label),
        hint_close = escape_html(&messages.hint_close),
        hint_navigate = escape_html(&messages.hint_navigate),
        hint_open = escape_html(&messages.hint_open),
    )
}
