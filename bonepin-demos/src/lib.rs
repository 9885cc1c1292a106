//! Shared setup for the demo programs
//!
//! Each binary calls [`init_logging`] and then [`board`] to get a
//! [`Board`] built from the configuration file named by `BONEPIN_CONFIG`,
//! or from the stock defaults when the variable is unset.

use std::env;

use anyhow::Context;
use bonepin_core::config::BoardConfig;
use bonepin_hal_beaglebone::Board;
use tracing::info;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
};

/// Environment variable holding the path of the board config file
pub const CONFIG_ENV: &str = "BONEPIN_CONFIG";

/// Log to stdout, filtered by `RUST_LOG`, defaulting to INFO
pub fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var("RUST_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Board configuration from `BONEPIN_CONFIG`, or defaults
pub fn load_config() -> anyhow::Result<BoardConfig> {
    match env::var_os(CONFIG_ENV) {
        Some(path) => {
            let config = BoardConfig::load(&path)
                .with_context(|| format!("loading {}", path.to_string_lossy()))?;
            info!(path = %path.to_string_lossy(), "loaded board config");
            Ok(config)
        }
        None => Ok(BoardConfig::default()),
    }
}

/// A board over the real sysfs tree
pub fn board() -> anyhow::Result<Board> {
    let config = load_config()?;
    info!(root = %config.sysfs_root.display(), "using sysfs");
    Ok(Board::sysfs(&config))
}
