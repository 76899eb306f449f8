use grid_tictactoe::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use grid_tictactoe::{BoardSettings, Mark};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE_NAME: &str = "demo_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, DemoConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedMove {
    pub row: usize,
    pub col: usize,
    pub mark: Mark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub board: BoardSettings,
    #[serde(default)]
    pub moves: Vec<ScriptedMove>,
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<(), String> {
        self.board.validate()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        let moves = (0..4)
            .map(|col| ScriptedMove {
                row: 0,
                col,
                mark: Mark::X,
            })
            .collect();

        Self {
            board: BoardSettings { rows: 4, columns: 4 },
            moves,
        }
    }
}
