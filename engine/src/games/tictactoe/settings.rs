use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::history::DEFAULT_HISTORY_CAPACITY;
use super::scoreboard::Scoreboard;
use super::types::GridSize;

pub const MAX_HISTORY_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub grid_size: GridSize,
    #[serde(default)]
    pub initial_scores: Scoreboard,
    pub history_capacity: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            grid_size: GridSize::Three,
            initial_scores: Scoreboard::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<(), String> {
        if self.history_capacity == 0 {
            return Err("history_capacity must be greater than 0".to_string());
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(format!(
                "history_capacity must not exceed {}",
                MAX_HISTORY_CAPACITY
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineSettings::default().validate().is_ok());
    }

    #[test]
    fn test_history_capacity_bounds() {
        let zero = EngineSettings { history_capacity: 0, ..EngineSettings::default() };
        assert!(zero.validate().is_err());
        let huge = EngineSettings {
            history_capacity: MAX_HISTORY_CAPACITY + 1,
            ..EngineSettings::default()
        };
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_grid_size_deserializes_from_number() {
        let settings: EngineSettings =
            serde_yaml_ng::from_str("grid_size: 4\nhistory_capacity: 10\n").unwrap();
        assert_eq!(settings.grid_size, GridSize::Four);
        assert_eq!(settings.initial_scores, Scoreboard::default());

        let bad: Result<EngineSettings, _> =
            serde_yaml_ng::from_str("grid_size: 7\nhistory_capacity: 10\n");
        assert!(bad.is_err());
    }
}
