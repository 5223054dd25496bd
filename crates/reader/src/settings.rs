use std::fmt::Display;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

const SETTINGS_VERSION: u32 = 1;
const DEFAULT_WATCH_TIMEOUT_SECONDS: f32 = 2.0;
const DEFAULT_ENEMY_SCREEN_FRACTION: f32 = 0.6;
const DEFAULT_BATTLEFIELD_CONTAINER: &str = "BattlefieldHolder";
const DEFAULT_STACK_CONTAINER: &str = "StackHolder";

type SettingsResult<T> = Result<T, String>;

/// Runtime tunables for the battlefield navigator. The engine itself never
/// persists anything; this file is read once at startup by the embedder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderSettings {
    pub settings_version: u32,
    /// How long a post-action watch session polls before dropping silently.
    pub watch_timeout_seconds: f32,
    /// An entity with no resolvable owner is treated as the opponent's iff
    /// its vertical screen position falls in the top fraction of the
    /// viewport.
    pub enemy_screen_fraction: f32,
    pub battlefield_container: String,
    pub stack_container: String,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            settings_version: SETTINGS_VERSION,
            watch_timeout_seconds: DEFAULT_WATCH_TIMEOUT_SECONDS,
            enemy_screen_fraction: DEFAULT_ENEMY_SCREEN_FRACTION,
            battlefield_container: DEFAULT_BATTLEFIELD_CONTAINER.to_string(),
            stack_container: DEFAULT_STACK_CONTAINER.to_string(),
        }
    }
}

impl ReaderSettings {
    pub fn load_from_path(path: &Path) -> SettingsResult<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|error| format!("read settings '{}': {error}", path.display()))?;
        let settings = Self::parse_settings_json(&raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn parse_settings_json(raw: &str) -> SettingsResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        match serde_path_to_error::deserialize::<_, Self>(&mut deserializer) {
            Ok(settings) => Ok(settings),
            Err(error) => {
                let path = error.path().to_string();
                let source = error.into_inner();
                if path.is_empty() || path == "." {
                    Err(format!("parse settings json: {source}"))
                } else {
                    Err(format!("parse settings json at {path}: {source}"))
                }
            }
        }
    }

    fn validation_err(path: &str, message: impl Into<String>) -> String {
        format!("validation failed at {path}: {}", message.into())
    }

    fn expected_actual(path: &str, expected: impl Display, actual: impl Display) -> String {
        Self::validation_err(path, format!("expected {expected}, got {actual}"))
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.settings_version != SETTINGS_VERSION {
            return Err(Self::expected_actual(
                "settings_version",
                SETTINGS_VERSION,
                self.settings_version,
            ));
        }
        if !self.watch_timeout_seconds.is_finite() || self.watch_timeout_seconds <= 0.0 {
            return Err(Self::expected_actual(
                "watch_timeout_seconds",
                "finite number > 0",
                self.watch_timeout_seconds,
            ));
        }
        if !self.enemy_screen_fraction.is_finite()
            || self.enemy_screen_fraction <= 0.0
            || self.enemy_screen_fraction >= 1.0
        {
            return Err(Self::expected_actual(
                "enemy_screen_fraction",
                "finite number in (0, 1)",
                self.enemy_screen_fraction,
            ));
        }
        if self.battlefield_container.trim().is_empty() {
            return Err(Self::validation_err(
                "battlefield_container",
                "container name must not be empty",
            ));
        }
        if self.stack_container.trim().is_empty() {
            return Err(Self::validation_err(
                "stack_container",
                "container name must not be empty",
            ));
        }
        Ok(())
    }
}
