//! Styles for the thesis CLI.
//!
//! Templates only ever name a semantic style (`ticker`, `section`, `tone-positive`);
//! the colors behind those names live here. Names that templates build at runtime,
//! like the `tone-*` badge styles chosen by [`thesis::format::Tone`], must be
//! registered too or the renderer flags them.

use super::theme::{rgb_to_ansi256, Theme};
use console::Style;
use once_cell::sync::Lazy;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const TITLE: &str = "title";
    pub const TICKER: &str = "ticker";
    pub const SECTION: &str = "section";
    pub const LABEL: &str = "label";
    pub const FIGURE: &str = "figure";
    pub const TIME: &str = "time";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    // List styles
    pub const LIST_INDEX: &str = "list-index";
    pub const LIST_NAME: &str = "list-name";
    pub const LIST_ANALYST: &str = "list-analyst";
    // Badge styles, see `Tone::style_name`
    pub const TONE_POSITIVE: &str = "tone-positive";
    pub const TONE_NEGATIVE: &str = "tone-negative";
    pub const TONE_NEUTRAL: &str = "tone-neutral";
    pub const TONE_DEFAULT: &str = "tone-default";
}

pub static THESIS_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let muted = Style::new().color256(rgb_to_ansi256((140, 140, 140)));
    let faint = Style::new().color256(rgb_to_ansi256((100, 100, 100)));
    let accent = Style::new().color256(rgb_to_ansi256((37, 99, 235)));

    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint)
        .add(names::TITLE, Style::new().bold())
        .add(names::TICKER, accent.clone().bold())
        .add(names::SECTION, accent.clone().bold().underlined())
        .add(names::LABEL, muted.clone())
        .add(names::FIGURE, Style::new().bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::LIST_INDEX, accent)
        .add(names::LIST_NAME, Style::new())
        .add(names::LIST_ANALYST, muted)
        .add(names::TONE_POSITIVE, Style::new().green().bold())
        .add(names::TONE_NEGATIVE, Style::new().red().bold())
        .add(names::TONE_NEUTRAL, Style::new().yellow().bold())
        .add(names::TONE_DEFAULT, Style::new().bold())
}
