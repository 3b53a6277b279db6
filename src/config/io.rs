use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default on-disk location of the user configuration.
pub const CONFIG_PATH: &str = "conf/config.toml";

/// Load configuration, falling back to defaults when the file is missing or
/// invalid so the UI can still launch.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(data) => match parse_config(&data) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), "Ignoring invalid configuration: {err:#}");
                AppConfig::default()
            }
        },
        Err(_) => {
            info!(path = %path.display(), "No configuration file; using defaults");
            AppConfig::default()
        }
    }
}

pub fn parse_config(data: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(data).context("configuration is not valid TOML")?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string(&ConfigTables::from(config)).context("configuration could not be serialized")
}

/// Persist configuration. Failures are logged and swallowed to keep the UI
/// responsive.
pub fn save_config(path: &Path, config: &AppConfig) {
    let contents = match serialize_config(config) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("Not saving configuration: {err:#}");
            return;
        }
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Err(err) = fs::write(path, contents) {
        warn!(path = %path.display(), "Failed to save configuration: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_input_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_tables_fill_in_defaults() {
        let config = parse_config("[appearance]\ntheme = \"dark\"\n").expect("partial config");
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.window_width, AppConfig::default().window_width);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn type_mismatches_are_invalid() {
        assert!(parse_config("[window]\nwidth = \"wide\"\n").is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = AppConfig::default();
        config.theme = ThemeMode::Dark;
        config.window_width = 999.0;
        config.window_pos_x = Some(12.0);
        config.window_pos_y = Some(34.0);
        config.log_level = LogLevel::Warn;
        config.key_toggle_theme = "ctrl+t".to_string();

        let serialized = serialize_config(&config).expect("serializes");
        let parsed = parse_config(&serialized).expect("parses back");
        assert_eq!(parsed, config);
    }
}
