// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search overlay as an explicit state machine.
//!
//! [`Overlay`] owns every bit of state the dialog needs and never touches a
//! DOM. Each operation returns the [`Effect`]s the host must perform, in
//! order. The browser shim executes them against real elements; tests just
//! look at them.
//!
//! # States
//!
//! ```text
//!            open / shortcut
//!   Closed ─────────────────▶ Empty ◀──────── type(q < min)
//!     ▲                         │
//!     │ Escape / close          │ type(q ≥ min)
//!     │                         ▼
//!     │          data pending ┌─────────┐ data ready, after quiet period
//!     │        ┌──────────────┤  input  ├───────────────┐
//!     │        ▼              └─────────┘               ▼
//!     │     Loading ──load done──▶ Results | NoResults ◀┘
//!     └──────────────────────────────────────────────────
//! ```
//!
//! The focused row is reset on every render, so it always points into the
//! rows currently on screen or nowhere.

use crate::config::SearchConfig;
use crate::debounce::Debouncer;
use crate::error::Error;
use crate::loader::{LoadGuard, LoadState};
use crate::render::{overlay_markup, Panel};
use crate::search::{Query, SearchIndex};
use crate::types::{Corpus, SearchItem};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayState {
    Closed,
    /// Open, showing the prompt.
    Empty,
    /// Open, a qualifying query is waiting for data.
    Loading,
    Results,
    NoResults,
}

/// Something the host has to do on behalf of the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    /// Attach click handlers that call `open` to every match of `selector`.
    BindTriggers { selector: String },
    /// Append the dialog markup to the page. Emitted once, on first open.
    Mount { markup: String },
    Unmount,
    /// Make the dialog visible and lock page scroll.
    Show,
    /// Hide the dialog and restore page scroll.
    Hide,
    ClearInput,
    /// Focus the input on the next animation frame.
    FocusInput,
    /// Fetch both data files concurrently, then call `load_succeeded` or
    /// `load_failed`.
    #[serde(rename_all = "camelCase")]
    Fetch {
        index_url: String,
        articles_url: String,
    },
    /// Replace the results area.
    Render { html: String },
    /// Mark row `index` as focused (and only that row), scroll it into view.
    FocusRow { index: usize },
    Navigate { url: String },
    /// Call `tick` after `delay_ms`. Early or stale ticks are harmless.
    #[serde(rename_all = "camelCase")]
    ScheduleTick { delay_ms: u64 },
    /// Suppress the browser's default handling of the current key event.
    PreventDefault,
}

/// A keyboard event as the host saw it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct KeyPress {
    /// The DOM `KeyboardEvent.key` value.
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    pub fn ctrl(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: true,
            meta: false,
        }
    }

    pub fn meta(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: false,
            meta: true,
        }
    }

    fn nav(&self) -> Nav {
        match self.key.as_str() {
            "Escape" => Nav::Escape,
            "ArrowDown" => Nav::Down,
            "ArrowUp" => Nav::Up,
            "Enter" => Nav::Enter,
            _ => Nav::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    Escape,
    Down,
    Up,
    Enter,
    Other,
}

/// Whole milliseconds, rounded up so a rescheduled tick is never early.
fn ceil_millis(d: Duration) -> u64 {
    let ms = d.as_millis() as u64;
    if d > Duration::from_millis(ms) {
        ms + 1
    } else {
        ms
    }
}

pub struct Overlay {
    config: SearchConfig,
    state: OverlayState,
    loader: LoadGuard,
    index: Option<SearchIndex>,
    input: String,
    focused: Option<usize>,
    panel: Panel,
    debounce: Debouncer<String>,
    mounted: bool,
}

impl Overlay {
    pub fn new(config: SearchConfig) -> Self {
        let quiet = Duration::from_millis(config.debounce_ms);
        Self {
            config,
            state: OverlayState::Closed,
            loader: LoadGuard::new(),
            index: None,
            input: String::new(),
            focused: None,
            panel: Panel::Prompt,
            debounce: Debouncer::new(quiet),
            mounted: false,
        }
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    pub fn init(&self) -> Vec<Effect> {
        vec![Effect::BindTriggers {
            selector: self.config.trigger_selector.clone(),
        }]
    }

    /// Open (or re-open) the dialog with an empty input.
    pub fn open(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.mounted {
            effects.push(Effect::Mount {
                markup: overlay_markup(&self.config.messages),
            });
            self.mounted = true;
        }
        effects.push(Effect::Show);

        self.state = OverlayState::Empty;
        self.input.clear();
        self.debounce.cancel();
        effects.push(Effect::ClearInput);
        effects.push(self.show(Panel::Prompt));
        effects.push(Effect::FocusInput);

        if self.loader.begin() {
            effects.push(Effect::Fetch {
                index_url: self.config.index_url.clone(),
                articles_url: self.config.articles_url.clone(),
            });
        }
        effects
    }

    pub fn close(&mut self) -> Vec<Effect> {
        if self.state == OverlayState::Closed {
            return Vec::new();
        }
        self.state = OverlayState::Closed;
        self.debounce.cancel();
        vec![Effect::Hide]
    }

    pub fn toggle(&mut self) -> Vec<Effect> {
        if self.is_open() {
            self.close()
        } else {
            self.open()
        }
    }

    /// Remove the dialog and forget everything, cached data included.
    ///
    /// A fetch still in flight is not forgotten: its completion is dropped,
    /// unless the overlay is opened again first and adopts it.
    pub fn destroy(&mut self) -> Vec<Effect> {
        let mut effects = self.close();
        if self.mounted {
            effects.push(Effect::Unmount);
        }
        self.mounted = false;
        self.index = None;
        self.loader.orphan();
        self.input.clear();
        self.focused = None;
        self.panel = Panel::Prompt;
        effects
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    /// The input text changed.
    pub fn input(&mut self, text: &str, now: Duration) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }
        self.input = text.to_string();
        self.debounce.cancel();

        let Some(query) = Query::parse(text, self.config.min_query_chars) else {
            self.state = OverlayState::Empty;
            return vec![self.show(Panel::Prompt)];
        };

        if self.loader.is_loading() {
            self.state = OverlayState::Loading;
            return vec![self.show(Panel::Loading)];
        }

        self.debounce.schedule(query.raw().to_string(), now);
        vec![Effect::ScheduleTick {
            delay_ms: self.config.debounce_ms,
        }]
    }

    /// Run the pending evaluation if its quiet period is over.
    ///
    /// A tick that arrives early asks for another one at the deadline, so a
    /// host timer running slightly ahead of `now` never strands the query.
    pub fn tick(&mut self, now: Duration) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }
        if let Some(raw) = self.debounce.poll(now) {
            return vec![self.evaluate(&raw)];
        }
        match self.debounce.deadline() {
            Some(deadline) => vec![Effect::ScheduleTick {
                delay_ms: ceil_millis(deadline.saturating_sub(now)),
            }],
            None => Vec::new(),
        }
    }

    /// Keys pressed inside the input.
    pub fn key(&mut self, press: &KeyPress) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }
        match press.nav() {
            Nav::Escape => self.close(),
            Nav::Down => self.move_focus(1),
            Nav::Up => self.move_focus(-1),
            Nav::Enter => self
                .focused
                .and_then(|i| self.panel.row(i))
                .map(|row| {
                    vec![Effect::Navigate {
                        url: row.url.clone(),
                    }]
                })
                .unwrap_or_default(),
            Nav::Other => Vec::new(),
        }
    }

    /// Keys pressed anywhere on the page.
    pub fn global_key(&mut self, press: &KeyPress) -> Vec<Effect> {
        if (press.ctrl || press.meta) && press.key == self.config.shortcut_key {
            let mut effects = vec![Effect::PreventDefault];
            effects.extend(self.toggle());
            return effects;
        }
        if press.nav() == Nav::Escape && self.is_open() {
            return self.close();
        }
        Vec::new()
    }

    // =========================================================================
    // LOADING
    // =========================================================================

    /// Data arrived. Re-evaluates the current input if it qualifies.
    pub fn load_succeeded(&mut self, corpus: Corpus) -> Vec<Effect> {
        if self.loader.is_loaded() {
            log::debug!("ignoring duplicate load completion");
            return Vec::new();
        }
        if !self.loader.finish_ok() {
            log::debug!("dropping load completion from a destroyed overlay");
            return Vec::new();
        }
        self.index = Some(
            SearchIndex::from_corpus(corpus).with_min_query_chars(self.config.min_query_chars),
        );
        self.reevaluate()
    }

    /// Loading failed. The next open retries; until then there is no data.
    pub fn load_failed(&mut self, error: &Error) -> Vec<Effect> {
        if !self.loader.finish_err() {
            log::debug!("dropping load failure from a destroyed overlay: {}", error);
            return Vec::new();
        }
        log::error!("failed to load search data: {}", error);
        if self.state == OverlayState::Loading {
            return self.reevaluate();
        }
        Vec::new()
    }

    fn reevaluate(&mut self) -> Vec<Effect> {
        if !self.is_open() || Query::parse(&self.input, self.config.min_query_chars).is_none() {
            return Vec::new();
        }
        self.debounce.cancel();
        let raw = self.input.clone();
        vec![self.evaluate(&raw)]
    }

    // =========================================================================
    // RENDERING
    // =========================================================================

    fn evaluate(&mut self, raw: &str) -> Effect {
        let panel = {
            let hits: Vec<&SearchItem> = match &self.index {
                Some(index) => index.search(raw),
                None => Vec::new(),
            };
            log::debug!("query {:?} matched {} items", raw.trim(), hits.len());
            Panel::build(&hits, raw, &self.config)
        };
        self.state = match panel {
            Panel::NoResults { .. } => OverlayState::NoResults,
            _ => OverlayState::Results,
        };
        self.show(panel)
    }

    fn show(&mut self, panel: Panel) -> Effect {
        let html = panel.to_html(&self.config.messages);
        self.panel = panel;
        self.focused = None;
        Effect::Render { html }
    }

    /// Move the focus marker, clamped to the rendered rows.
    fn move_focus(&mut self, delta: isize) -> Vec<Effect> {
        let mut effects = vec![Effect::PreventDefault];
        let count = self.panel.row_count();
        if count == 0 {
            return effects;
        }
        let current = self.focused.map_or(-1, |i| i as isize);
        let next = (current + delta).clamp(0, count as isize - 1) as usize;
        self.focused = Some(next);
        effects.push(Effect::FocusRow { index: next });
        effects
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != OverlayState::Closed
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn input_text(&self) -> &str {
        &self.input
    }

    pub fn load_state(&self) -> LoadState {
        self.loader.state()
    }

    pub fn index(&self) -> Option<&SearchIndex> {
        self.index.as_ref()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// When the pending evaluation becomes due, if one is pending.
    pub fn pending_deadline(&self) -> Option<Duration> {
        self.debounce.deadline()
    }
}
