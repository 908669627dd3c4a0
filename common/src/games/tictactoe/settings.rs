use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Player, SearchMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub human: Player,
    pub ai: Player,
    #[serde(default)]
    pub search: SearchMode,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            human: Player::X,
            ai: Player::O,
            search: SearchMode::Exhaustive,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.human == self.ai {
            return Err(format!(
                "Human and engine cannot both play {}",
                self.human
            ));
        }
        Ok(())
    }
}
