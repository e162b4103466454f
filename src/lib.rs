//! # blade_trick_gen
//!
//! A fully offline, deterministic trick catalog and selection engine for
//! BLADE — the elimination party game (think S-K-A-T-E on aggressive
//! inline skates) where players attempt tricks and collect letters on
//! failure.
//!
//! The crate ships a static 71-trick catalog with nested variations and
//! entrances, a weighted-random selector that respects a difficulty
//! ceiling, an adaptive easy/medium/hard ratchet driven by recent
//! performance, and a complete game-session state machine — everything a
//! front end needs except the front end itself.
//!
//! ## How it works
//!
//! 1. Create a [`RoundRequest`] with the categories in play, a difficulty
//!    preference, a ceiling, and an optional RNG seed.
//! 2. Call [`draw_round`] — the engine filters the catalog, weights each
//!    candidate by popularity and preference, spins a roulette wheel, and
//!    attaches a variation/entrance combination that fits the ceiling.
//! 3. The returned [`SelectionResult`] carries the trick, the chosen
//!    modifiers, and the combined difficulty — ready to display.
//! 4. Feed attempt outcomes to [`adjust_difficulty_preference`] (or let a
//!    [`game::GameSession`] do all of the bookkeeping: letters,
//!    elimination, rotation, and standings).
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same draw (or the exact same whole game) every time.
//! - **Never stalls**: when nothing fits the ceiling the easiest tricks
//!   stay eligible, and an exhausted rotation pool resets instead of
//!   erroring — players always get a next trick.
//! - **Adaptive**: two successes in a player's recent window step the band
//!   up, two failures step it down, one level at a time.
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::HashSet;
//! use blade_trick_gen::{
//!     draw_round, DifficultyPreference, RoundRequest, TrickCategory,
//! };
//!
//! // Minimal — only categories are required (defaults: Medium, ceiling 30,
//! // both modifiers, entropy):
//! let round = draw_round(
//!     RoundRequest::new(vec![TrickCategory::SoulGrinds]),
//!     &HashSet::new(),
//! )
//! .unwrap();
//! println!("Try: {}", round.display_name());
//!
//! // Full control — every field set, fixed seed:
//! let round = draw_round(
//!     RoundRequest {
//!         categories: vec![TrickCategory::SoulGrinds, TrickCategory::Spins],
//!         difficulty_preference: DifficultyPreference::Hard,
//!         max_difficulty: 8,
//!         include_variation: true,
//!         include_entrance: true,
//!         rng_seed: Some(42),
//!     },
//!     &HashSet::new(),
//! )
//! .unwrap();
//! assert!(round.total_difficulty <= 8);
//! ```

pub mod browse;
pub mod error;
pub mod game;
pub mod trick_engine;

// Convenience re-exports so callers can use `blade_trick_gen::draw_round`
// directly without reaching into `trick_engine::`.
pub use error::{EngineError, Result};
pub use trick_engine::{
    adjust_difficulty_preference, all_tricks, attach_modifiers, draw_round, next_trick,
    select_weighted_trick, trick_by_id, tricks_by_category, DifficultyPreference, Entrance,
    RoundRequest, SelectionResult, Trick, TrickAttempt, TrickCategory, Variation,
};

pub use game::{AttemptOutcome, GameSession, GameSettings, GameSummary};
