//! # Context Resolution
//!
//! Everything thesis reads is relative to the working directory:
//!
//! - configuration lives in `<cwd>/.thesis/config.json`
//! - reports live in the data directory, `public/data` unless configured
//!
//! The data directory is resolved once, in this order:
//!
//! 1. an explicit override (the `--data-dir` flag or `THESIS_DATA_DIR`, both
//!    handled by clap before reaching here)
//! 2. `data-dir` from the config file
//! 3. the built-in default
//!
//! Relative directories are joined onto the working directory, so the same
//! config works from wherever the tool is launched inside a checkout.

use crate::api::ThesisApi;
use crate::commands::ThesisPaths;
use crate::config::ThesisConfig;
use crate::error::Result;
use crate::store::fs::DirSource;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = ".thesis";

pub struct ThesisContext {
    pub api: ThesisApi<DirSource>,
}

pub fn initialize(cwd: &Path, data_dir_override: Option<PathBuf>) -> Result<ThesisContext> {
    let config_dir = cwd.join(CONFIG_DIR_NAME);
    let config = ThesisConfig::load(&config_dir)?;

    let data_dir = resolve_data_dir(cwd, data_dir_override, &config);
    log::debug!("data directory: {}", data_dir.display());

    let paths = ThesisPaths {
        config_dir,
        data_dir: data_dir.clone(),
    };
    let api = ThesisApi::new(
        DirSource::new(data_dir),
        paths,
        config.default_report,
    );

    Ok(ThesisContext { api })
}

fn resolve_data_dir(
    cwd: &Path,
    data_dir_override: Option<PathBuf>,
    config: &ThesisConfig,
) -> PathBuf {
    let dir = data_dir_override.unwrap_or_else(|| PathBuf::from(&config.data_dir));
    if dir.is_absolute() {
        dir
    } else {
        cwd.join(dir)
    }
}
