mod error;

pub use error::{Error, ErrorKind};

use crate::favorites::{FavoriteEntry, Favorites};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = "aero-weather";
pub const CONFIG_FILE_NAME: &str = "weather_app_config.json";

/// Everything the application persists between runs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "apiKey", alias = "api_key")]
    pub api_key: String,
    pub favorites: Favorites,
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

impl Config {
    /// Reads the config at `path`. A missing file is `Ok(None)`.
    pub fn read(path: &Path) -> Result<Option<Config>, Error> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::new(ErrorKind::Read(path.to_owned(), e))),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| Error::new(ErrorKind::JSONParse(path.to_owned(), e)))
    }

    /// Rewrites the whole file at `path`, creating its directory if needed.
    pub fn write(&self, path: &Path) -> Result<(), Error> {
        let contents = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Error::new(ErrorKind::Write(parent.to_owned(), e)))?;
        }

        fs::write(path, contents).map_err(|e| Error::new(ErrorKind::Write(path.to_owned(), e)))
    }
}

/// In-memory config mirrored to disk after every mutation.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    config: Config,
}

impl ConfigStore {
    /// Loads the store from `path`, falling back to an empty config when the
    /// file is missing or unreadable.
    pub fn load<P: Into<PathBuf>>(path: P) -> ConfigStore {
        let path = path.into();

        let config = match Config::read(&path) {
            Ok(Some(config)) => {
                info!(
                    "Loaded {} favorites and API key from {}",
                    config.favorites.len(),
                    path.display()
                );
                config
            }
            Ok(None) => {
                info!("Config file {} not found, starting fresh", path.display());
                Config::default()
            }
            Err(e) => {
                warn!("Error loading config: {}. Starting with an empty config", e);
                Config::default()
            }
        };

        ConfigStore { path, config }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    pub fn has_api_key(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    pub fn favorites(&self) -> &Favorites {
        &self.config.favorites
    }

    pub fn save(&self) -> Result<(), Error> {
        match self.config.write(&self.path) {
            Ok(()) => {
                debug!("Config saved to {}", self.path.display());
                Ok(())
            }
            Err(e) => {
                error!("Error saving config: {}", e);
                Err(e)
            }
        }
    }

    pub fn set_api_key(&mut self, key: &str) -> Result<(), Error> {
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::new(ErrorKind::EmptyApiKey));
        }

        self.config.api_key = key.to_owned();
        self.save()
    }

    /// Returns `Ok(false)` without touching the file if the city is already a
    /// favorite.
    pub fn add_favorite(&mut self, name: &str, icon: &str) -> Result<bool, Error> {
        if !self.config.favorites.add(name, icon) {
            return Ok(false);
        }

        info!("Added to favorites: {}", name);
        self.save()?;
        Ok(true)
    }

    pub fn remove_favorite(&mut self, name: &str) -> Result<Option<FavoriteEntry>, Error> {
        let removed = self.config.favorites.remove(name);
        if removed.is_some() {
            info!("Removed from favorites: {}", name);
            self.save()?;
        }
        Ok(removed)
    }
}
