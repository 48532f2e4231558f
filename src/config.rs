use std::path::PathBuf;

use serde::Deserialize;

use crate::core::decode::DecoderFormat;

impl Config {
    pub fn init() -> Result<Self, config::ConfigError> {
        // get config toml path from env, with default
        let config_path = std::env::var("MOVIESHELF_CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./config.toml"));

        Self::load(&config_path)
    }

    /// Read `path` (optional) and overlay `MOVIESHELF__*` environment variables.
    pub fn load(path: &std::path::Path) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .set_default("logs.level", "info")?
            // Add in config toml, if any
            .add_source(config::File::from(path).required(false))
            // Add in settings from the environment (with a prefix of MOVIESHELF)
            .add_source(
                config::Environment::with_prefix("MOVIESHELF")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("catalog.sources")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub logs: LogsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

// ===============================================================================
// Catalog
// ===============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Files loaded at startup, in order.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Decoder used for sources whose extension is not recognized.
    #[serde(default)]
    pub default_format: DecoderFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = Config::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.logs.level, "info");
        assert!(config.catalog.sources.is_empty());
        assert_eq!(config.catalog.default_format, DecoderFormat::Json);
    }

    #[test]
    fn reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                [logs]
                level = "debug"

                [catalog]
                sources = ["shelf.json", "attic.csv"]
                default_format = "csv"
            "#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.logs.level, "debug");
        assert_eq!(config.catalog.sources, vec!["shelf.json", "attic.csv"]);
        assert_eq!(config.catalog.default_format, DecoderFormat::Csv);
    }
}
