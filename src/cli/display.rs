// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the lupa CLI.
//!
//! Results print inside light box frames, colored with a OneDark palette on
//! dark terminals and One Light on light ones. `LUPA_THEME=light|dark` picks
//! explicitly; otherwise the background hint in `COLORFGBG` decides, and dark
//! wins when there is none. `NO_COLOR` or a non-TTY stdout turns every style
//! off, so `lupa search ... | grep` sees plain text.

use lupa::MatchTier;
use std::sync::OnceLock;

/// Inner width of a frame, between the two vertical borders.
pub const FRAME_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(u8, u8, u8);

impl Rgb {
    fn escape(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }
}

/// Colors by role rather than by hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub error: Rgb,
    pub ok: Rgb,
    pub warn: Rgb,
    pub link: Rgb,
    pub heading: Rgb,
    pub border: Rgb,
    pub best: Rgb,
}

const DARK: Palette = Palette {
    error: Rgb(224, 108, 117),
    ok: Rgb(152, 195, 121),
    warn: Rgb(229, 192, 123),
    link: Rgb(97, 175, 239),
    heading: Rgb(86, 182, 194),
    border: Rgb(92, 99, 112),
    best: Rgb(166, 226, 46),
};

const LIGHT: Palette = Palette {
    error: Rgb(228, 86, 73),
    ok: Rgb(80, 161, 79),
    warn: Rgb(193, 132, 1),
    link: Rgb(64, 120, 242),
    heading: Rgb(1, 132, 188),
    border: Rgb(160, 161, 167),
    best: Rgb(68, 140, 39),
};

fn light_background(theme: Option<&str>, colorfgbg: Option<&str>) -> bool {
    match theme.map(str::to_ascii_lowercase).as_deref() {
        Some("light" | "l") => return true,
        Some("dark" | "d") => return false,
        _ => {}
    }
    // "fg;bg" or "fg;default;bg"; 7 and 9..=15 are light backgrounds
    colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| bg == 7 || (9..=15).contains(&bg))
}

pub fn palette() -> &'static Palette {
    static PALETTE: OnceLock<Palette> = OnceLock::new();
    PALETTE.get_or_init(|| {
        let theme = std::env::var("LUPA_THEME").ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        if light_background(theme.as_deref(), colorfgbg.as_deref()) {
            LIGHT
        } else {
            DARK
        }
    })
}

pub fn use_colors() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// STYLING
// ═══════════════════════════════════════════════════════════════════════════

fn style(prefix: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", prefix, text, RESET)
    } else {
        text.to_string()
    }
}

pub fn paint(color: Rgb, text: &str) -> String {
    style(&color.escape(), text)
}

pub fn paint_bold(color: Rgb, text: &str) -> String {
    style(&format!("{}{}", BOLD, color.escape()), text)
}

pub fn dim(text: &str) -> String {
    style(DIM, text)
}

pub fn warn(text: &str) -> String {
    paint(palette().warn, text)
}

pub fn error_line(message: &str) -> String {
    paint_bold(palette().error, message)
}

/// Color-coded match tier badge
pub fn tier_badge(tier: MatchTier) -> String {
    let colors = palette();
    match tier {
        MatchTier::Title => paint(colors.best, "[title]"),
        MatchTier::Tag => paint(colors.link, "[tag]"),
        MatchTier::Summary => paint(colors.border, "[summary]"),
    }
}

/// A count, green/yellow when zero is the healthy value, neutral otherwise.
pub fn count_colored(count: usize, bad_when_nonzero: bool) -> String {
    let colors = palette();
    let text = count.to_string();
    match (bad_when_nonzero, count) {
        (false, _) => paint(colors.heading, &text),
        (true, 0) => paint(colors.ok, &text),
        (true, _) => paint_bold(colors.warn, &text),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// WIDTH
// ═══════════════════════════════════════════════════════════════════════════

/// Printed width of `s`, skipping `ESC [ ... m` sequences.
pub fn visible_len(s: &str) -> usize {
    let mut segments = s.split('\x1b');
    let head = segments.next().map_or(0, |seg| seg.chars().count());
    head + segments
        .map(|seg| match seg.find('m') {
            Some(end) => seg[end + 1..].chars().count(),
            None => 0,
        })
        .sum::<usize>()
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Cut plain text to `max` characters with a trailing `…`.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// FRAMES
// ═══════════════════════════════════════════════════════════════════════════

fn border(piece: &str) -> String {
    paint(palette().border, piece)
}

fn frame_top(label: &str) -> String {
    let title = format!("─ {} ", paint_bold(palette().heading, label));
    let rest = FRAME_WIDTH.saturating_sub(visible_len(&title));
    format!("{}{}{}", border("┌"), title, border(&format!("{}┐", "─".repeat(rest))))
}

fn frame_row(content: &str) -> String {
    format!("{}{}{}", border("│"), pad_right(content, FRAME_WIDTH), border("│"))
}

fn frame_bottom() -> String {
    border(&format!("└{}┘", "─".repeat(FRAME_WIDTH)))
}

/// ┌─ LABEL ──────┐
pub fn section_top(label: &str) {
    println!("{}", frame_top(label));
}

/// │ content      │
pub fn row(content: &str) {
    println!("{}", frame_row(content));
}

/// └──────────────┘
pub fn section_bot() {
    println!("{}", frame_bottom());
}
