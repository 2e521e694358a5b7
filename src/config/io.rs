use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("parsing config tables")?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string(&ConfigTables::from(config)).context("serializing config tables")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::{LogLevel, PanelChoice, ThemeMode};

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_values_from_tables() {
        let config = parse_config(
            r#"
[appearance]
theme = "night"

[chat]
backend_url = "https://docs.example.com"
request_timeout_secs = 0

[panels]
open_panel = "summary"

[logging]
log_level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.backend_url, "https://docs.example.com");
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.open_panel, PanelChoice::Summary);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.window_width, AppConfig::default().window_width);
    }

    #[test]
    fn serialized_config_reads_back() {
        let mut config = AppConfig::default();
        config.theme = ThemeMode::Night;
        config.open_panel = PanelChoice::None;
        config.request_timeout_secs = 15;
        let text = serialize_config(&config).unwrap();
        assert!(text.contains("[chat]"));
        assert_eq!(parse_config(&text).unwrap(), config);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        assert!(parse_config("[logging]\nlog_level = \"loud\"\n").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/docchat/config.toml"));
        assert_eq!(config, AppConfig::default());
    }
}
