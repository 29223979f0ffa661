use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::puzzle2048::Puzzle2048Settings;

    #[test]
    fn test_yaml_settings_round_trip() {
        let serializer = YamlConfigSerializer;
        let settings = Puzzle2048Settings {
            board_size: 5,
            target_value: 1024,
        };
        let yaml = serializer.serialize(&settings).unwrap();
        assert!(yaml.contains("board_size: 5"));
        let parsed: Puzzle2048Settings = serializer.deserialize(&yaml).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_malformed_yaml_is_reported() {
        let serializer = YamlConfigSerializer;
        let result: Result<Puzzle2048Settings, String> = serializer.deserialize("board_size: [");
        let err = result.unwrap_err();
        assert!(err.starts_with("Failed to deserialize config"));
    }
}
