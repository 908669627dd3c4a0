use std::any::type_name;

use serde::{Deserialize, Serialize};

/// Converts a config value to and from its on-disk text form.
pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    const FORMAT: &'static str = "YAML";

    pub fn new() -> Self {
        Self
    }
}

/// `common::foo::Config` -> `Config`, so messages stay readable.
fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| {
            format!(
                "Cannot write {} as {}: {}",
                short_type_name::<TConfig>(),
                Self::FORMAT,
                e
            )
        })
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| {
            format!(
                "Cannot read {} from {}: {}",
                short_type_name::<TConfig>(),
                Self::FORMAT,
                e
            )
        })
    }
}
