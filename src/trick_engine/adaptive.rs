//! Adaptive difficulty — a 3-state hysteresis ratchet over
//! [`DifficultyPreference`].
//!
//! The band only ever moves one level per round, and only in the direction
//! matching the just-resolved attempt's outcome: a player on a streak gets
//! harder tricks, a struggling player gets easier ones, and mixed results
//! leave the band alone.

use crate::trick_engine::models::{DifficultyPreference, TrickAttempt};

/// Number of recent attempts the ratchet looks at.
const WINDOW: usize = 3;

/// Compute the next difficulty preference from performance history.
///
/// `history` is the attempt log *before* the just-resolved attempt;
/// `success` is that attempt's outcome and picks the ratchet direction.
/// The window is the [`WINDOW`] most recent entries of the whole history,
/// then narrowed to `player_name`'s own attempts — so in a multiplayer
/// game, other players' interleaved attempts shrink a player's effective
/// window.
///
/// Steps up only when the window holds ≥2 successes for the player, steps
/// down only on ≥2 failures; otherwise the preference is unchanged.
pub fn adjust_difficulty_preference(
    history: &[TrickAttempt],
    player_name: &str,
    success: bool,
    current: DifficultyPreference,
) -> DifficultyPreference {
    let matching = history
        .iter()
        .rev()
        .take(WINDOW)
        .filter(|a| a.player_name == player_name && a.success == success)
        .count();

    if matching < 2 {
        return current;
    }
    if success {
        current.step_up()
    } else {
        current.step_down()
    }
}
