//! Templates for terminal output.
//!
//! Templates live as standalone files in `templates/` and are embedded here at
//! compile time. They use explicit whitespace control (`{%-`, `-%}`), so every line
//! break in the output comes from a visible line in the template.
//!
//! Layout math (truncation, padding) is done in `render.rs`; templates only pick
//! styles and decide what to show.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const REPORT_TEMPLATE: &str = include_str!("templates/report.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
