// --- File: crates/stocktake_config/src/lib.rs ---

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;

pub mod models;
pub use models::*;

/// Environment variable prefix for configuration overrides.
///
/// `STOCKTAKE__API__BASE_URL` overrides `api.base_url` from the files.
pub const ENV_PREFIX: &str = "STOCKTAKE";

/// Loads the application configuration.
///
/// Sources, later ones win:
/// 1. `config/default` at the workspace root (any supported format), optional
/// 2. `config/{RUN_ENV}` (`RUN_ENV` defaults to `debug`), optional
/// 3. environment variables prefixed with `STOCKTAKE` and `__` separators
///
/// Returns a `ConfigError` when no source supplies the mandatory
/// `api.base_url`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    let config_root = workspace_root().join("config");
    let default_path = config_root.join("default");
    let env_path = config_root.join(&run_env);

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    builder.build()?.try_deserialize()
}

/// Resolves the workspace root so config files are found no matter which
/// member crate the process was started from. Falls back to the current
/// directory outside of cargo.
fn workspace_root() -> PathBuf {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string()));
    manifest_dir
        .ancestors()
        .nth(2) // crates/stocktake_config -> crates -> workspace root
        .map(PathBuf::from)
        .unwrap_or(manifest_dir)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures the dotenv file is loaded into the process environment exactly
/// once. `DOTENV_OVERRIDE` selects an alternate file; the default is `.env`.
pub fn ensure_dotenv_loaded() {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });
}
