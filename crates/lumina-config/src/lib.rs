use lumina_astrology::HouseSystem;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate locations for `configs/lumina.toml`, relative to the working directory.
const CONFIG_PATHS: [&str; 2] = ["configs/lumina.toml", "../../configs/lumina.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct LuminaSettings {
    pub house_system: HouseSystem,
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// File the settings came from, `None` when defaults were used
    pub source: Option<PathBuf>,
}

impl Default for LuminaSettings {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::default(),
            log_level: default_log_level(),
            source: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EngineToml {
    #[serde(default)]
    house_system: HouseSystem,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingToml {
    #[serde(default = "default_log_level")]
    level: String,
}

impl Default for LoggingToml {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    engine: EngineToml,
    #[serde(default)]
    logging: LoggingToml,
}

/// Parse settings from TOML text.
pub fn parse_settings(text: &str) -> anyhow::Result<LuminaSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse lumina.toml: {e}"))?;
    let RootConfigToml { engine, logging } = root;
    if logging.level.trim().is_empty() {
        anyhow::bail!("logging.level must not be empty");
    }
    Ok(LuminaSettings {
        house_system: engine.house_system,
        log_level: logging.level,
        source: None,
    })
}

/// Find the first readable config among `CONFIG_PATHS`.
pub fn read_config_toml_text() -> Option<(PathBuf, String)> {
    CONFIG_PATHS.iter().find_map(|p| {
        fs::read_to_string(p)
            .ok()
            .map(|text| (PathBuf::from(p), text))
    })
}

/// Load settings from `explicit` (which must exist), else from the first
/// candidate path, else defaults.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<LuminaSettings> {
    let (path, text) = match explicit {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("Could not read config {}: {e}", path.display())
            })?;
            (path.to_path_buf(), text)
        }
        None => match read_config_toml_text() {
            Some(found) => found,
            None => {
                log::debug!("No lumina.toml found in {:?}, using defaults", CONFIG_PATHS);
                return Ok(LuminaSettings::default());
            }
        },
    };

    let mut settings = parse_settings(&text)
        .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;
    settings.source = Some(path);
    Ok(settings)
}
