//! `wmdrag` general configuration

mod checks;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wmdrag_core::models::DragRendering;
use xdg::BaseDirectories;

/// Drag behaviour, read from `config.toml`.
///
/// # Example
///
/// ```toml
/// edge_resistance = 10
/// move_popup = true
/// resize_popup = false
/// resize_nearest = true
/// move_rendering = "apply_immediately"
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Pixels a window may be pushed past a screen edge before it leaves it.
    /// 0 disables edge resistance.
    pub edge_resistance: i32,
    /// Show a coordinates popup while moving windows.
    pub move_popup: bool,
    /// Show a size popup while resizing windows.
    pub resize_popup: bool,
    pub move_rendering: DragRendering,
    pub resize_rendering: DragRendering,
    /// Resize from the corner nearest to the pointer instead of always the
    /// bottom right one.
    pub resize_nearest: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            edge_resistance: 10,
            move_popup: true,
            resize_popup: true,
            move_rendering: DragRendering::ApplyImmediately,
            resize_rendering: DragRendering::ApplyImmediately,
            resize_nearest: true,
            log_level: "info".to_owned(),
        }
    }
}

impl wmdrag_core::Config for Config {
    fn edge_resistance(&self) -> i32 {
        self.edge_resistance
    }

    fn move_popup(&self) -> bool {
        self.move_popup
    }

    fn resize_popup(&self) -> bool {
        self.resize_popup
    }

    fn move_rendering(&self) -> DragRendering {
        self.move_rendering
    }

    fn resize_rendering(&self) -> DragRendering {
        self.resize_rendering
    }

    fn resize_nearest(&self) -> bool {
        self.resize_nearest
    }
}

/// Loads the config file, falling back to the defaults if it can't be read.
///
/// The load error is handed back rather than logged, as the log level itself
/// comes from the config and no subscriber is installed yet.
#[must_use]
pub fn load(path: Option<&Path>) -> (Config, Option<anyhow::Error>) {
    match load_from_file(path) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    }
}

/// Loads `path`, or `$XDG_CONFIG_HOME/wmdrag/config.toml` when no path is given.
///
/// # Errors
///
/// Fails if the XDG directories can't be resolved, if the file can't be read
/// or parsed, or if a default file can't be written on first use.
/// A given `path` which doesn't exist is an error; a missing default file is
/// created from [`Config::default`].
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let config_filename = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Configuration file {} not found", path.display());
            }
            path.to_path_buf()
        }
        None => default_path()?,
    };
    if config_filename.exists() {
        tracing::debug!("Config file '{}' found.", config_filename.display());
        let contents = fs::read_to_string(&config_filename)?;
        Ok(toml::from_str(&contents)?)
    } else {
        tracing::debug!("Config file not found. Writing the default one.");
        let config = Config::default();
        fs::write(&config_filename, toml::to_string(&config)?)?;
        Ok(config)
    }
}

/// # Errors
///
/// Fails if the XDG base directories can't be resolved or created.
pub fn default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("wmdrag")?;
    Ok(path.place_config_file("config.toml")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn an_empty_file_gives_the_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_files_keep_the_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            edge_resistance = 0
            resize_nearest = false
            resize_rendering = "show_outline_only"
            "#,
        )
        .unwrap();
        assert_eq!(config.edge_resistance, 0);
        assert!(!config.resize_nearest);
        assert_eq!(config.resize_rendering, DragRendering::ShowOutlineOnly);
        assert!(config.move_popup);
        assert_eq!(config.move_rendering, DragRendering::ApplyImmediately);
    }

    #[test]
    fn unknown_rendering_modes_are_rejected() {
        assert!(toml::from_str::<Config>(r#"move_rendering = "wireframe""#).is_err());
    }

    #[test]
    fn load_from_file_reads_the_given_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "edge_resistance = 25\nmove_popup = false").unwrap();
        let config = load_from_file(Some(file.path())).unwrap();
        assert_eq!(config.edge_resistance, 25);
        assert!(!config.move_popup);
    }

    #[test]
    fn load_falls_back_to_the_defaults_and_returns_the_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "edge_resistance = \"lots\"").unwrap();
        let (config, err) = load(Some(file.path()));
        assert_eq!(config, Config::default());
        assert!(err.is_some());
    }

    #[test]
    fn load_returns_no_error_for_a_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "resize_popup = false").unwrap();
        let (config, err) = load(Some(file.path()));
        assert!(!config.resize_popup);
        assert!(err.is_none());
    }

    #[test]
    fn a_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn the_default_config_survives_a_round_trip_through_toml() {
        let text = toml::to_string(&Config::default()).unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), Config::default());
    }
}
