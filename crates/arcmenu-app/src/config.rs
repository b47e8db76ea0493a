use arcmenu::{MenuConfig, Size};
use derive_more::{AsRef, Deref, Display, From, Into};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemLabel(String);

crate::impl_string_newtype!(ItemLabel);

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ItemConfig {
    pub label: ItemLabel,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ItemConfig {
    pub fn size(&self) -> Option<Size> {
        Some(Size::new(self.width?, self.height?))
    }
}

/// Optional angle overrides, in degrees. Unset keys use the engine defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct AngleConfig {
    pub speed_ratio: Option<f64>,
    pub start_angle_offset: Option<f64>,
    pub spacing_angle: Option<f64>,
    pub min_angle: Option<f64>,
    pub max_angle: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub angles: AngleConfig,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "arcmenu", "arcmenu").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    explicit.map_or_else(get_config_path, Ok)
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("ARCMENU").separator("__"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads the config at `path`, falling back to the bundled default when the
/// file is missing or broken.
pub fn load_or_default(path: &Path) -> AppConfig {
    if !path.exists() {
        log::info!("No config at {}, using defaults", path.display());
        return default_config();
    }

    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config {}: {}", path.display(), e);
            default_config()
        }
    }
}

pub fn default_config() -> AppConfig {
    toml_default().unwrap_or_default()
}

fn toml_default() -> Result<AppConfig, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()?;
    Ok(s.try_deserialize()?)
}

pub fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcmenu::RingColor;
    use std::io::Write;

    #[test]
    fn test_default_config_parses() {
        let cfg = default_config();
        assert_eq!(cfg.menu, MenuConfig::default());
        assert_eq!(cfg.angles.spacing_angle, Some(25.0));
        assert_eq!(cfg.angles.min_angle, None);
        assert_eq!(cfg.items.len(), 5);
        assert_eq!(cfg.items[0].label.as_str(), "Home");
        assert_eq!(cfg.items[0].size(), Some(Size::new(44.0, 44.0)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r##"
[menu]
ring_color = "#ff0000"
ring_thickness = 60.0

[angles]
spacing_angle = 30.0

[[items]]
label = "One"
width = 20.0
height = 30.0

[[items]]
label = "Two"
"##
        )
        .unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.menu.ring_color, RingColor::new(255, 0, 0));
        assert_eq!(cfg.menu.ring_thickness, 60.0);
        assert_eq!(cfg.angles.spacing_angle, Some(30.0));
        assert_eq!(cfg.angles.speed_ratio, None);
        assert_eq!(cfg.items[0].size(), Some(Size::new(20.0, 30.0)));
        assert_eq!(cfg.items[1].size(), None);
    }

    #[test]
    fn test_bad_color_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[menu]\nring_color = \"not-a-color\"").unwrap();
        assert!(load_config(file.path()).is_err());
        assert_eq!(load_or_default(file.path()), default_config());
    }

    #[test]
    fn test_write_default_config_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default_config(&path).unwrap();
        assert_eq!(load_config(&path).unwrap(), default_config());

        fs_err::write(&path, "[menu]\nring_thickness = 12.0\n").unwrap();
        write_default_config(&path).unwrap();
        assert_eq!(load_config(&path).unwrap().menu.ring_thickness, 12.0);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_or_default(&dir.path().join("absent.toml"));
        assert_eq!(cfg, default_config());
    }
}
