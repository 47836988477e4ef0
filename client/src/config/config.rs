use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{GameType, TimingConfig};

const CONFIG_FILE_NAME: &str = "mini_games_client_config.yaml";
const MAX_EVENT_LOG_SIZE: usize = 100;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub default_game: GameType,
    #[serde(default)]
    pub timing: TimingConfig,
    pub event_log_size: usize,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.timing.validate()?;
        if self.event_log_size == 0 || self.event_log_size > MAX_EVENT_LOG_SIZE {
            return Err(format!(
                "event_log_size must be between 1 and {}",
                MAX_EVENT_LOG_SIZE
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_game: GameType::TicTacToe4x4,
            timing: TimingConfig::default(),
            event_log_size: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_mini_games_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();

        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_game_type_uses_short_names_in_yaml() {
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&Config::default()).unwrap();
        assert!(serialized_string.contains("default_game: tictactoe4"));
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(path.clone());

        let serialized_string = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized_string).unwrap();
        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config: Config = serializer.deserialize(&read_string).unwrap();

        assert_eq!(default_config, deserialized_config);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_manager_saves_and_loads_config() {
        let path = get_temp_file_path();
        let config = Config {
            default_game: GameType::Memory,
            event_log_size: 3,
            ..Config::default()
        };
        let manager = get_config_manager(Some(path.clone()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(Some(path.clone()));
        assert_eq!(fresh_manager.get_config().unwrap(), config);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_missing_timing_section_uses_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer
            .deserialize("default_game: poker\nevent_log_size: 5\n")
            .unwrap();
        assert_eq!(config.timing, TimingConfig::default());
        assert_eq!(config.default_game, GameType::Poker);
    }

    #[test]
    fn test_validation_rejects_out_of_range_values() {
        let too_slow = Config {
            timing: TimingConfig {
                modal_delay_ms: 60_000,
                ..TimingConfig::default()
            },
            ..Config::default()
        };
        assert!(too_slow.validate().is_err());

        let no_log = Config {
            event_log_size: 0,
            ..Config::default()
        };
        assert!(no_log.validate().is_err());
    }
}
