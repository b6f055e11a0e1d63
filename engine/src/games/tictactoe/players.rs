use super::types::Mark;

pub const DEFAULT_X_NAME: &str = "Player 1";
pub const DEFAULT_O_NAME: &str = "Player 2";

/// Display names used in results and in the history log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    pub x: String,
    pub o: String,
}

impl PlayerNames {
    pub fn get(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Empty names fall back to the defaults.
    pub fn set(&mut self, mark: Mark, name: &str) {
        let name = name.trim();
        match mark {
            Mark::X => self.x = if name.is_empty() { DEFAULT_X_NAME } else { name }.to_string(),
            Mark::O => self.o = if name.is_empty() { DEFAULT_O_NAME } else { name }.to_string(),
        }
    }

    /// `"Player 1 (X)"`
    pub fn label(&self, mark: Mark) -> String {
        format!("{} ({})", self.get(mark), mark)
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            x: DEFAULT_X_NAME.to_string(),
            o: DEFAULT_O_NAME.to_string(),
        }
    }
}
