//! Settings
//!
//! `settings.json` in the app config directory, created with defaults on
//! first run.

use std::path::{Path, PathBuf};

use daystream_core::domain::{DomainError, DomainResult};
use daystream_core::services::{GeminiConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

pub const SETTINGS_FILE: &str = "settings.json";

/// Weight used before any measurement exists
pub const DEFAULT_INITIAL_WEIGHT: f64 = 88.5;

/// Environment variables consulted, in order, when no key is stored
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub initial_weight: f64,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Seed welcome data when storage is empty
    pub seed_defaults: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            initial_weight: DEFAULT_INITIAL_WEIGHT,
            gemini_api_key: String::new(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            seed_defaults: true,
        }
    }
}

impl AppSettings {
    /// Fill an empty API key from the environment
    pub fn with_env_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if !self.gemini_api_key.trim().is_empty() {
            return self;
        }
        let key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty());
        match key {
            Some(key) => Self {
                gemini_api_key: key,
                ..self
            },
            None => self,
        }
    }

    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.gemini_api_key.clone(),
            model: self.gemini_model.clone(),
            base_url: self.gemini_base_url.clone(),
        }
    }
}

/// Partial update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    pub initial_weight: Option<f64>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_base_url: Option<String>,
    pub seed_defaults: Option<bool>,
}

pub struct SettingsManager {
    path: PathBuf,
    data: RwLock<AppSettings>,
}

impl SettingsManager {
    pub async fn new(path: PathBuf) -> DomainResult<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Storage(format!("{}: {}", parent.display(), e)))?;
        }

        let initial = match tokio::fs::read(&path).await {
            Ok(bytes) if !bytes.is_empty() => match serde_json::from_slice::<AppSettings>(&bytes) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("ignoring unreadable {}: {}", path.display(), e);
                    AppSettings::default()
                }
            },
            _ => {
                let default = AppSettings::default();
                write_settings(&path, &default).await?;
                default
            }
        };

        Ok(Self {
            path,
            data: RwLock::new(initial),
        })
    }

    /// Settings as stored on disk
    pub async fn get(&self) -> AppSettings {
        self.data.read().await.clone()
    }

    /// Stored settings with environment overrides applied
    pub async fn effective(&self) -> AppSettings {
        self.get().await.with_env_overrides(|name| std::env::var(name).ok())
    }

    pub async fn update(&self, update: SettingsUpdate) -> DomainResult<AppSettings> {
        let mut data = self.data.write().await;
        let mut next = data.clone();

        if let Some(weight) = update.initial_weight {
            if !(weight.is_finite() && weight > 0.0) {
                return Err(DomainError::InvalidInput(format!(
                    "initial weight must be positive, got {}",
                    weight
                )));
            }
            next.initial_weight = weight;
        }
        if let Some(key) = update.gemini_api_key {
            next.gemini_api_key = key.trim().to_string();
        }
        if let Some(model) = update.gemini_model.filter(|m| !m.trim().is_empty()) {
            next.gemini_model = model.trim().to_string();
        }
        if let Some(url) = update.gemini_base_url.filter(|u| !u.trim().is_empty()) {
            next.gemini_base_url = url.trim().to_string();
        }
        if let Some(seed) = update.seed_defaults {
            next.seed_defaults = seed;
        }

        write_settings(&self.path, &next).await?;
        *data = next.clone();
        log::info!("settings updated");
        Ok(next)
    }
}

async fn write_settings(path: &Path, settings: &AppSettings) -> DomainResult<()> {
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| DomainError::Storage(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_creates_defaults_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join(SETTINGS_FILE);

        let manager = SettingsManager::new(path.clone()).await.unwrap();

        assert_eq!(manager.get().await, AppSettings::default());
        let stored: AppSettings =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(stored.initial_weight, 88.5);
        assert_eq!(stored.gemini_model, "gemini-2.5-flash");
    }

    #[tokio::test]
    async fn test_missing_fields_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"initial_weight": 80.0}"#).unwrap();

        let settings = SettingsManager::new(path).await.unwrap().get().await;

        assert_eq!(settings.initial_weight, 80.0);
        assert!(settings.seed_defaults);
        assert_eq!(settings.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
    }

    #[tokio::test]
    async fn test_partial_update_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let manager = SettingsManager::new(path.clone()).await.unwrap();

        let updated = manager
            .update(SettingsUpdate {
                gemini_api_key: Some("  secret ".to_string()),
                seed_defaults: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.gemini_api_key, "secret");
        assert!(!updated.seed_defaults);
        assert_eq!(updated.initial_weight, 88.5);

        let reloaded = SettingsManager::new(path).await.unwrap().get().await;
        assert_eq!(reloaded, updated);
    }

    #[tokio::test]
    async fn test_rejects_invalid_initial_weight() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SettingsManager::new(dir.path().join(SETTINGS_FILE)).await.unwrap();

        let result = manager
            .update(SettingsUpdate {
                initial_weight: Some(-3.0),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
        assert_eq!(manager.get().await.initial_weight, 88.5);
    }

    #[test]
    fn test_env_override_fills_empty_key_only() {
        let env = |name: &str| match name {
            "GEMINI_API_KEY" => Some(String::new()),
            "API_KEY" => Some("from-env".to_string()),
            _ => None,
        };

        let filled = AppSettings::default().with_env_overrides(env);
        assert_eq!(filled.gemini_api_key, "from-env");

        let stored = AppSettings {
            gemini_api_key: "stored".to_string(),
            ..Default::default()
        };
        assert_eq!(stored.with_env_overrides(env).gemini_api_key, "stored");
        assert_eq!(
            AppSettings::default().with_env_overrides(|_| None).gemini_api_key,
            ""
        );
    }
}
