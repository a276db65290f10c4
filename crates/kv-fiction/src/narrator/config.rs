//! Narrator configuration.

/// Configuration for the narrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarratorConfig {
    /// Word joining the titles of outstanding goals.
    pub goal_conjunction: String,
    /// Lead-in for the list of exits.
    pub exits_label: String,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            goal_conjunction: "и".to_string(),
            exits_label: "можно пройти".to_string(),
        }
    }
}

impl NarratorConfig {
    /// Create a new narrator config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the goal conjunction.
    pub fn with_goal_conjunction(mut self, word: impl Into<String>) -> Self {
        self.goal_conjunction = word.into();
        self
    }

    /// Set the exits lead-in.
    pub fn with_exits_label(mut self, label: impl Into<String>) -> Self {
        self.exits_label = label.into();
        self
    }
}
