use std::collections::HashSet;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::trick_engine::{catalog, selector};
use crate::trick_engine::models::{RoundRequest, SelectionResult};

/// Draw one round from the built-in catalog.
///
/// Builds the RNG from `request.rng_seed` (entropy when `None`), rotates
/// past `used_ids` per the round-rotation rules, and attaches modifiers.
/// The chosen trick's id is not recorded anywhere — append it to the
/// used-id set yourself to keep the rotation moving.
pub fn draw_round(request: RoundRequest, used_ids: &HashSet<u32>) -> Result<SelectionResult> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let trick = selector::next_trick(
        catalog::all_tricks(),
        &request.categories,
        used_ids,
        request.difficulty_preference,
        request.max_difficulty,
        &mut rng,
    )?;
    debug!(
        "round draw: {} (difficulty {}, preference {})",
        trick.name, trick.difficulty, request.difficulty_preference
    );

    Ok(selector::attach_modifiers(
        trick,
        request.difficulty_preference,
        request.max_difficulty,
        request.include_variation,
        request.include_entrance,
        &mut rng,
    ))
}
