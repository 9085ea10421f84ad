//! # CLI Behavior
//!
//! This is one possible UI client for thesis, not the application itself.
//!
//! ## Naked Execution
//!
//! Running `thesis` with no arguments is `thesis list`.
//!
//! ## Selecting Reports
//!
//! `view` and `path` take either the number shown by `list` (1-based, in the
//! current sort order) or an exact filename. `view` without a selector opens the
//! configured default report, falling back to the newest one.
//!
//! ## Module Structure
//!
//! - `commands`: entry point and per-command handlers
//! - `render`: output formatting through templates
//! - `setup`: argument parsing via clap
//! - `styles`: named terminal styles
//! - `templates`: embedded template files
//! - `theme`: the `style` template filter

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;
mod theme;

pub use commands::run;
