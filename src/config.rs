use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Game-level settings: which side the computer plays and how long it
/// pretends to think before moving.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side played by the computer. The engine is side-symmetric, so
    /// either works; `O` matches the classic human-goes-first setup.
    pub computer_player: Player,
    /// Pacing delay before the computer moves, in milliseconds. Purely
    /// cosmetic; the search itself finishes well within it.
    pub thinking_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            computer_player: Player::O,
            thinking_delay_ms: 2000,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.thinking_delay_ms > 60_000 {
            return Err(ConfigError::Validation(
                "game.thinking_delay_ms must be <= 60000".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.game.computer_player, Player::O);
        assert_eq!(config.game.thinking_delay_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [game]
            computer_player = "X"
            thinking_delay_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.game.computer_player, Player::X);
        assert_eq!(config.game.thinking_delay_ms, 500);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [game]
            thinking_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.game.computer_player, Player::O);
        assert_eq!(config.game.thinking_delay_ms, 0);
    }

    #[test]
    fn test_validation_rejects_excessive_delay() {
        let mut config = AppConfig::default();
        config.game.thinking_delay_ms = 120_000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }
}
