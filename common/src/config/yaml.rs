use std::any::type_name;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// Stores game settings as YAML. Errors name the config type so a bad
/// `timing` block is reported against the struct that rejected it.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: DeserializeOwned + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to write {} as YAML: {}", short_type_name::<TConfig>(), e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to read {} from YAML: {}", short_type_name::<TConfig>(), e))
    }
}
