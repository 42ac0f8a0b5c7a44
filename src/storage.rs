use crate::app::AppStore;
use crate::constants::{CONFIG_DIR_NAME, STORE_KEY};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Load/save boundary for the persisted store
pub struct Storage {
    config_dir: PathBuf,
}

impl Storage {
    pub fn new() -> Self {
        let config_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME);
        Storage { config_dir }
    }

    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Storage {
            config_dir: config_dir.into(),
        }
    }

    /// File holding the persisted store
    pub fn path(&self) -> PathBuf {
        self.config_dir.join(format!("{STORE_KEY}.json"))
    }

    /// Ensure config directory exists
    fn ensure_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Write the whole store
    pub fn save(&self, store: &AppStore) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(store)?;
        fs::write(self.path(), content)?;
        Ok(())
    }

    /// Read the store back, falling back to defaults for anything missing or malformed
    pub fn load(&self) -> AppStore {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no persisted store, using defaults");
                return AppStore::default();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read persisted store");
                return AppStore::default();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(value) => rehydrate(&value),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "persisted store is not valid JSON");
                AppStore::default()
            }
        }
    }

    /// Remove the persisted store
    pub fn clear(&self) -> Result<()> {
        remove_if_exists(&self.path())
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Build a store from persisted JSON, one field at a time
pub fn rehydrate(value: &Value) -> AppStore {
    let defaults = AppStore::default();
    let Some(groups) = value.as_object() else {
        warn!("persisted store is not an object, using defaults");
        return defaults;
    };

    AppStore {
        side_bar: overlay(defaults.side_bar, groups.get("sideBar"), "sideBar"),
        device: overlay(defaults.device, groups.get("device"), "device"),
        app: overlay(defaults.app, groups.get("app"), "app"),
    }
}

/// Apply persisted fields over `default`, keeping only those the group still accepts
fn overlay<T>(default: T, persisted: Option<&Value>, group: &str) -> T
where
    T: Serialize + DeserializeOwned,
{
    let Some(Value::Object(fields)) = persisted else {
        return default;
    };
    let mut accepted: Map<String, Value> = match serde_json::to_value(&default) {
        Ok(Value::Object(map)) => map,
        _ => return default,
    };

    for (key, value) in fields {
        let mut candidate = accepted.clone();
        candidate.insert(key.clone(), value.clone());
        if serde_json::from_value::<T>(Value::Object(candidate.clone())).is_ok() {
            accepted = candidate;
        } else {
            warn!(group, field = %key, "discarding malformed persisted field");
        }
    }

    serde_json::from_value(Value::Object(accepted)).unwrap_or(default)
}
