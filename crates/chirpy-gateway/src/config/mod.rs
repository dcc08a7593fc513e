//! Service config loader (strict parsing + environment overrides).
//!
//! Sources, later ones win:
//! 1. built-in defaults
//! 2. YAML file named by `CHIRPY_CONFIG` (optional)
//! 3. `PLATFORM`, `DB_URL`, `CHIRPY_LISTEN`, `CHIRPY_ASSETS` from the environment,
//!    falling back to a `.env` file in the working directory
//!
//! Variables already set in the process environment win over `.env` entries.

pub mod schema;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use chirpy_core::error::{ChirpyError, Result};

pub use schema::{ChirpyConfig, DatabaseSection, ServerSection, DEV_PLATFORM};

/// Env var naming an optional YAML config file.
pub const CONFIG_PATH_VAR: &str = "CHIRPY_CONFIG";

/// Parse a YAML file without validating it; env overrides may still fill
/// required fields before [`ChirpyConfig::validate`] runs.
pub fn load_from_file(path: &str) -> Result<ChirpyConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ChirpyError::Config(format!("read config failed: {e}")))?;
    parse_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ChirpyConfig> {
    let cfg = parse_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Default dotenv file, relative to the working directory.
pub const DOTENV_FILE: &str = ".env";

/// Load from the process environment, backed by `.env` when present.
pub fn load_from_env() -> Result<ChirpyConfig> {
    let dotenv = read_dotenv(Path::new(DOTENV_FILE))?;
    load_with(|key| std::env::var(key).ok().or_else(|| dotenv.get(key).cloned()))
}

/// Read `KEY=value` pairs from a dotenv file. A missing file is empty.
pub fn read_dotenv(path: &Path) -> Result<HashMap<String, String>> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no dotenv file");
            return Ok(HashMap::new());
        }
        Err(e) => return Err(ChirpyError::Config(format!("read {} failed: {e}", path.display()))),
    };

    let vars = iter
        .collect::<std::result::Result<HashMap<_, _>, _>>()
        .map_err(|e| ChirpyError::Config(format!("invalid {}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), count = vars.len(), "dotenv file loaded");
    Ok(vars)
}

/// Same as [`load_from_env`] with an injectable variable lookup.
pub fn load_with<F>(lookup: F) -> Result<ChirpyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = match lookup(CONFIG_PATH_VAR) {
        Some(path) => load_from_file(&path)?,
        None => ChirpyConfig::default(),
    };
    cfg.apply_env(&lookup);
    cfg.validate()?;
    Ok(cfg)
}

fn parse_str(s: &str) -> Result<ChirpyConfig> {
    serde_yaml::from_str(s).map_err(|e| ChirpyError::Config(format!("invalid yaml: {e}")))
}
