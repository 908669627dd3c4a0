use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_scores: bool,
    pub highlight_winning_line: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_scores: false,
            highlight_winning_line: true,
        }
    }
}
