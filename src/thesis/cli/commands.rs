//! # CLI Layer
//!
//! The only place that knows about stdout, stderr and exit codes.
//!
//! 1. parse arguments with clap
//! 2. set up logging and color
//! 3. resolve the context (config, data directory)
//! 4. dispatch to the API and render the result
//!
//! Handlers return the process exit code. `thesis list --json` mirrors the listing
//! response: status 200 exits 0, status 500 exits 1.

use super::render::{render_messages, render_report, render_report_list, render_text_list};
use super::setup::{Cli, Commands};
use super::theme::stdout_supports_color;
use chrono::Utc;
use clap::Parser;
use thesis::api::{CmdMessage, ConfigAction, ListingResponse, ThesisApi};
use thesis::commands::helpers::no_reports_messages;
use thesis::error::Result;
use thesis::init::initialize;
use thesis::store::fs::DirSource;

const SUCCESS: i32 = 0;
const FAILURE: i32 = 1;

struct Output {
    use_color: bool,
}

pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        console::set_colors_enabled(false);
    }
    let out = Output {
        use_color: !cli.no_color && stdout_supports_color(),
    };

    let cwd = std::env::current_dir()?;
    let ctx = initialize(&cwd, cli.data_dir)?;
    let api = &ctx.api;

    match cli.command.unwrap_or(Commands::List { json: false }) {
        Commands::List { json } => handle_list(api, json, &out),
        Commands::View { selector, json } => handle_view(api, selector.as_deref(), json, &out),
        Commands::Path { selectors } => handle_paths(api, &selectors, &out),
        Commands::Config { key, value } => handle_config(api, key, value, &out),
    }
}

/// `warn` by default, `debug` with `-v`; `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn handle_list(api: &ThesisApi<DirSource>, json: bool, out: &Output) -> Result<i32> {
    let response = api.listing_response();
    let code = if response.status() == 200 {
        SUCCESS
    } else {
        FAILURE
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(code);
    }

    match response {
        ListingResponse::Files { files } if files.is_empty() => {
            print!(
                "{}",
                render_messages(&no_reports_messages(&api.paths().data_dir), out.use_color)
            );
        }
        ListingResponse::Files { files } => {
            print!("{}", render_report_list(&files, out.use_color));
        }
        ListingResponse::Failed { error } => {
            eprint!(
                "{}",
                render_messages(&[CmdMessage::error(error)], out.use_color)
            );
        }
    }
    Ok(code)
}

fn handle_view(
    api: &ThesisApi<DirSource>,
    selector: Option<&str>,
    json: bool,
    out: &Output,
) -> Result<i32> {
    let result = api.view_report(selector)?;

    match &result.viewed {
        Some(viewed) if json => {
            println!("{}", serde_json::to_string_pretty(&viewed.report)?);
        }
        Some(viewed) => {
            print!("{}", render_report(viewed, Utc::now(), out.use_color));
        }
        None => {}
    }
    print!("{}", render_messages(&result.messages, out.use_color));
    Ok(SUCCESS)
}

fn handle_paths(api: &ThesisApi<DirSource>, selectors: &[String], out: &Output) -> Result<i32> {
    let result = api.report_paths(selectors)?;
    let lines: Vec<String> = result
        .report_paths
        .iter()
        .map(|path| path.display().to_string())
        .collect();

    print!("{}", render_text_list(&lines, "No reports selected.", out.use_color));
    Ok(SUCCESS)
}

fn handle_config(
    api: &ThesisApi<DirSource>,
    key: Option<String>,
    value: Option<String>,
    out: &Output,
) -> Result<i32> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines: Vec<String> = config
                .list_all()
                .into_iter()
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration.", out.use_color));
        }
    }
    print!("{}", render_messages(&result.messages, out.use_color));

    let failed = result
        .messages
        .iter()
        .any(|m| m.level == thesis::api::MessageLevel::Error);
    Ok(if failed { FAILURE } else { SUCCESS })
}
