use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Catalog primitives
// ---------------------------------------------------------------------------

/// The fixed set of trick categories in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrickCategory {
    SoulGrinds,
    GrooveGrinds,
    SpecialGrinds,
    TopsideGrinds,
    AirTricks,
    Spins,
    Flips,
    Entrances,
    Variations,
}

impl TrickCategory {
    /// All nine categories in catalog order.
    pub const ALL: [TrickCategory; 9] = [
        TrickCategory::SoulGrinds,
        TrickCategory::GrooveGrinds,
        TrickCategory::SpecialGrinds,
        TrickCategory::TopsideGrinds,
        TrickCategory::AirTricks,
        TrickCategory::Spins,
        TrickCategory::Flips,
        TrickCategory::Entrances,
        TrickCategory::Variations,
    ];
}

impl fmt::Display for TrickCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrickCategory::SoulGrinds    => "Soul Grinds",
            TrickCategory::GrooveGrinds  => "Groove Grinds",
            TrickCategory::SpecialGrinds => "Special Grinds",
            TrickCategory::TopsideGrinds => "Topside Grinds",
            TrickCategory::AirTricks     => "Air Tricks",
            TrickCategory::Spins         => "Spins",
            TrickCategory::Flips         => "Flips",
            TrickCategory::Entrances     => "Entrances",
            TrickCategory::Variations    => "Variations",
        };
        write!(f, "{}", s)
    }
}

/// A named modifier applied to a trick, adding its own difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    pub name: String,
    pub difficulty: u8,
}

/// A named approach/setup modifier applied to a trick, adding its own
/// difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrance {
    pub name: String,
    pub difficulty: u8,
}

fn default_popularity() -> u8 {
    5
}

/// A named skating maneuver with a base difficulty (0-10) and category.
///
/// Tricks are immutable seed data; `variations` and `possible_entrances`
/// may be empty. `popularity` (1-10) defaults to 5 when the seed data
/// omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trick {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub difficulty: u8,
    pub category: TrickCategory,
    #[serde(default)]
    pub variations: Vec<Variation>,
    #[serde(default)]
    pub possible_entrances: Vec<Entrance>,
    #[serde(default = "default_popularity")]
    pub popularity: u8,
}

// ---------------------------------------------------------------------------
// Difficulty preference
// ---------------------------------------------------------------------------

/// Coarse difficulty band biasing which tricks and modifiers are likely to
/// be chosen. Both an input (weighting bias) and an output (the adaptive
/// ratchet in [`adjust_difficulty_preference`] steps it one level at a
/// time).
///
/// [`adjust_difficulty_preference`]: crate::trick_engine::adaptive::adjust_difficulty_preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyPreference {
    Easy,
    Medium,
    Hard,
}

impl Default for DifficultyPreference {
    fn default() -> Self {
        DifficultyPreference::Medium
    }
}

impl fmt::Display for DifficultyPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyPreference::Easy   => write!(f, "Easy"),
            DifficultyPreference::Medium => write!(f, "Medium"),
            DifficultyPreference::Hard   => write!(f, "Hard"),
        }
    }
}

impl DifficultyPreference {
    /// One band harder; `Hard` stays `Hard`.
    pub fn step_up(self) -> Self {
        match self {
            DifficultyPreference::Easy   => DifficultyPreference::Medium,
            DifficultyPreference::Medium => DifficultyPreference::Hard,
            DifficultyPreference::Hard   => DifficultyPreference::Hard,
        }
    }

    /// One band easier; `Easy` stays `Easy`.
    pub fn step_down(self) -> Self {
        match self {
            DifficultyPreference::Hard   => DifficultyPreference::Medium,
            DifficultyPreference::Medium => DifficultyPreference::Easy,
            DifficultyPreference::Easy   => DifficultyPreference::Easy,
        }
    }

    /// Sampling weight for a trick under this preference.
    ///
    /// Easy favors low difficulty, medium peaks at difficulty 5, hard
    /// scales with difficulty. Saturating arithmetic keeps the weight at
    /// zero (not an error) for out-of-band difficulties; a zero weight
    /// means zero selection probability.
    pub fn trick_weight(self, popularity: u8, difficulty: u8) -> u32 {
        let popularity = u32::from(popularity);
        let difficulty = u32::from(difficulty);
        match self {
            DifficultyPreference::Easy => popularity * 11u32.saturating_sub(difficulty),
            DifficultyPreference::Medium => {
                let distance = difficulty.abs_diff(5);
                popularity * 6u32.saturating_sub(distance)
            }
            DifficultyPreference::Hard => popularity * difficulty,
        }
    }

    /// Secondary band filter applied to variation/entrance difficulties.
    pub fn modifier_band_contains(self, difficulty: u8) -> bool {
        match self {
            DifficultyPreference::Easy   => difficulty <= 9,
            DifficultyPreference::Medium => (6..=18).contains(&difficulty),
            DifficultyPreference::Hard   => difficulty >= 12,
        }
    }
}

// ---------------------------------------------------------------------------
// Round request / result types
// ---------------------------------------------------------------------------

/// One recorded attempt at a trick. Histories are append-only and owned by
/// the caller; the engine only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickAttempt {
    pub trick_id: u32,
    pub success: bool,
    pub player_name: String,
    pub round_number: u32,
}

/// Parameters for one round draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRequest {
    pub categories: Vec<TrickCategory>,
    pub difficulty_preference: DifficultyPreference,
    /// Ceiling on the combined trick + variation + entrance difficulty.
    pub max_difficulty: u8,
    pub include_variation: bool,
    pub include_entrance: bool,
    /// `Some(seed)` reproduces the exact same draw every time; `None`
    /// draws from entropy.
    pub rng_seed: Option<u64>,
}

impl RoundRequest {
    /// Minimal constructor — only categories are required.
    /// Defaults: medium preference, ceiling 30, both modifiers on, entropy.
    pub fn new(categories: Vec<TrickCategory>) -> Self {
        RoundRequest {
            categories,
            difficulty_preference: DifficultyPreference::Medium,
            max_difficulty: 30,
            include_variation: true,
            include_entrance: true,
            rng_seed: None,
        }
    }
}

/// One playable trick + modifiers tuple, constructed fresh per round.
///
/// `total_difficulty` is the (capped) base difficulty plus any attached
/// modifier difficulties and never exceeds the requested ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub trick: Trick,
    pub variation: Option<Variation>,
    pub entrance: Option<Entrance>,
    pub total_difficulty: u8,
}

impl SelectionResult {
    /// Call name for the round, e.g. `"Alleyoop Makio (Rocket Makio)"`.
    pub fn display_name(&self) -> String {
        let mut name = String::new();
        if let Some(entrance) = &self.entrance {
            name.push_str(&entrance.name);
            name.push(' ');
        }
        name.push_str(&self.trick.name);
        if let Some(variation) = &self.variation {
            name.push_str(&format!(" ({})", variation.name));
        }
        name
    }
}
