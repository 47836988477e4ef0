mod config_content_provider;
mod config_manager;
mod yaml;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use yaml::{ConfigSerializer, YamlConfigSerializer};

/// Checked by `ConfigManager` after every load and before every save.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
