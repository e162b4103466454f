use serde::{Deserialize, Serialize};

use crate::trick_engine::models::{DifficultyPreference, TrickCategory};

/// Lowest ceiling the in-game difficulty control allows.
pub const MIN_MAX_DIFFICULTY: u8 = 1;
/// Highest ceiling the in-game difficulty control allows.
pub const MAX_MAX_DIFFICULTY: u8 = 10;

/// Per-session configuration: which categories are in play, the starting
/// preference band, the difficulty ceiling, and whether modifiers are
/// drawn at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub selected_categories: Vec<TrickCategory>,
    pub difficulty_preference: DifficultyPreference,
    pub max_difficulty: u8,
    pub include_variation: bool,
    pub include_entrance: bool,
}

impl Default for GameSettings {
    /// The four grind categories, medium preference, ceiling 7, both
    /// modifier kinds enabled.
    fn default() -> Self {
        GameSettings {
            selected_categories: vec![
                TrickCategory::SoulGrinds,
                TrickCategory::GrooveGrinds,
                TrickCategory::SpecialGrinds,
                TrickCategory::TopsideGrinds,
            ],
            difficulty_preference: DifficultyPreference::Medium,
            max_difficulty: 7,
            include_variation: true,
            include_entrance: true,
        }
    }
}

impl GameSettings {
    /// Nudge the difficulty ceiling by `delta`, clamped to
    /// [`MIN_MAX_DIFFICULTY`]..=[`MAX_MAX_DIFFICULTY`].
    pub fn adjust_max_difficulty(&mut self, delta: i8) {
        let next = i16::from(self.max_difficulty) + i16::from(delta);
        self.max_difficulty =
            next.clamp(i16::from(MIN_MAX_DIFFICULTY), i16::from(MAX_MAX_DIFFICULTY)) as u8;
    }
}
