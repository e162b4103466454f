//! Weighted trick selection and modifier attachment.
//!
//! Selection runs in three layers:
//!
//! 1. [`select_weighted_trick`] — category filter, difficulty ceiling with a
//!    minimum-difficulty fallback, popularity × preference weighting, and a
//!    cumulative-weight roulette draw.
//! 2. [`attach_modifiers`] — picks an optional variation and entrance for a
//!    chosen trick, keeping the combined difficulty within the ceiling.
//! 3. [`next_trick`] — round-to-round rotation over a caller-owned
//!    used-trick set, resetting the pool once every eligible trick has been
//!    played.
//!
//! All functions are pure given their RNG: they never touch the caller's
//! collections, so any number of independent game sessions can share the
//! static catalog.

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use crate::error::{EngineError, Result};
use crate::trick_engine::models::{
    DifficultyPreference, Entrance, SelectionResult, Trick, TrickCategory, Variation,
};

/// Select one trick from `tricks` via weighted random sampling.
///
/// Candidates are the tricks whose category is in `categories` and whose
/// base difficulty fits `max_difficulty`; when nothing fits the ceiling,
/// the tricks sharing the lowest difficulty present stay eligible so a
/// round can always be produced. Errors only when `categories` matches no
/// trick at all.
pub fn select_weighted_trick<'a, R: Rng>(
    tricks: &'a [Trick],
    categories: &[TrickCategory],
    preference: DifficultyPreference,
    max_difficulty: u8,
    rng: &mut R,
) -> Result<&'a Trick> {
    let in_categories: Vec<&Trick> = tricks
        .iter()
        .filter(|t| categories.contains(&t.category))
        .collect();

    weighted_pick(&in_categories, preference, max_difficulty, rng)
        .ok_or(EngineError::NoTricksAvailable)
}

/// Round rotation: draw from the tricks in `categories` that are not in
/// `used_ids` and fit `max_difficulty`. Once that pool is exhausted the
/// rotation resets and draws from the full category/difficulty-filtered
/// pool again — repeats become possible, by design, so the game never
/// stalls.
///
/// The chosen id is *not* added to `used_ids`; recording it is the
/// caller's job.
pub fn next_trick<'a, R: Rng>(
    tricks: &'a [Trick],
    categories: &[TrickCategory],
    used_ids: &HashSet<u32>,
    preference: DifficultyPreference,
    max_difficulty: u8,
    rng: &mut R,
) -> Result<&'a Trick> {
    let in_categories: Vec<&Trick> = tricks
        .iter()
        .filter(|t| categories.contains(&t.category))
        .collect();

    let unused: Vec<&Trick> = in_categories
        .iter()
        .copied()
        .filter(|t| !used_ids.contains(&t.id) && t.difficulty <= max_difficulty)
        .collect();

    let pool = if unused.is_empty() {
        debug!("trick rotation exhausted; resetting to the full pool");
        &in_categories
    } else {
        &unused
    };

    weighted_pick(pool, preference, max_difficulty, rng).ok_or(EngineError::NoTricksAvailable)
}

/// Steps 2-4 of the selection procedure over a category-filtered pool.
/// `None` only when `pool` is empty.
fn weighted_pick<'a, R: Rng>(
    pool: &[&'a Trick],
    preference: DifficultyPreference,
    max_difficulty: u8,
    rng: &mut R,
) -> Option<&'a Trick> {
    if pool.is_empty() {
        return None;
    }

    let mut candidates: Vec<&Trick> = pool
        .iter()
        .copied()
        .filter(|t| t.difficulty <= max_difficulty)
        .collect();

    if candidates.is_empty() {
        // Nothing fits the ceiling: keep the easiest tricks present so the
        // game can continue. The caller may surface this degraded state.
        let easiest = pool.iter().map(|t| t.difficulty).min()?;
        warn!(
            "no tricks at or below difficulty {max_difficulty}; \
             falling back to difficulty {easiest}"
        );
        candidates = pool
            .iter()
            .copied()
            .filter(|t| t.difficulty == easiest)
            .collect();
    }

    Some(roulette(&candidates, preference, rng))
}

/// Cumulative-weight roulette draw. A zero weight gives a candidate zero
/// probability; if every weight is zero, or floating-point subtraction
/// runs off the end of the wheel, a uniform index pick stands in.
fn roulette<'a, R: Rng>(
    candidates: &[&'a Trick],
    preference: DifficultyPreference,
    rng: &mut R,
) -> &'a Trick {
    let weights: Vec<u32> = candidates
        .iter()
        .map(|t| preference.trick_weight(t.popularity, t.difficulty))
        .collect();
    let total: u32 = weights.iter().sum();

    if total > 0 {
        let mut roll = rng.gen_range(0.0..f64::from(total));
        for (&trick, &weight) in candidates.iter().zip(&weights) {
            roll -= f64::from(weight);
            if roll <= 0.0 {
                return trick;
            }
        }
    }

    candidates[rng.gen_range(0..candidates.len())]
}

/// Attach an optional variation and entrance to `trick`, keeping the
/// combined difficulty within `max_difficulty`.
///
/// The base difficulty is capped at the ceiling first, so even a trick
/// chosen through the minimum-difficulty fallback yields a result that
/// respects the ceiling. Entrances additionally carry a 30% skip chance
/// per round so they are not a guaranteed fixture.
pub fn attach_modifiers<R: Rng>(
    trick: &Trick,
    preference: DifficultyPreference,
    max_difficulty: u8,
    include_variation: bool,
    include_entrance: bool,
    rng: &mut R,
) -> SelectionResult {
    let ceiling = u16::from(max_difficulty);
    let mut total = u16::from(trick.difficulty).min(ceiling);

    let mut variation: Option<Variation> = None;
    if include_variation && !trick.variations.is_empty() {
        let in_budget: Vec<&Variation> = trick
            .variations
            .iter()
            .filter(|v| total + u16::from(v.difficulty) <= ceiling)
            .collect();
        if let Some(chosen) = pick_banded(&in_budget, preference, rng) {
            total += u16::from(chosen.difficulty);
            variation = Some(chosen.clone());
        }
    }

    let mut entrance: Option<Entrance> = None;
    if include_entrance && !trick.possible_entrances.is_empty() {
        let in_budget: Vec<&Entrance> = trick
            .possible_entrances
            .iter()
            .filter(|e| total + u16::from(e.difficulty) <= ceiling)
            .collect();

        // 30% chance to skip the entrance entirely, drawn regardless of
        // what the budget allows, so entrances stay a surprise rather than
        // a fixture.
        if !rng.gen_bool(0.3) {
            if !in_budget.is_empty() {
                if let Some(chosen) = pick_banded(&in_budget, preference, rng) {
                    total += u16::from(chosen.difficulty);
                    entrance = Some(chosen.clone());
                }
            } else if !rng.gen_bool(0.3) {
                // Secondary skip check, then one more pass over the plain
                // budget filter before giving up.
                let retry: Vec<&Entrance> = trick
                    .possible_entrances
                    .iter()
                    .filter(|e| total + u16::from(e.difficulty) <= ceiling)
                    .collect();
                if !retry.is_empty() {
                    let chosen = retry[rng.gen_range(0..retry.len())];
                    total += u16::from(chosen.difficulty);
                    entrance = Some(chosen.clone());
                }
            }
        }
    }

    SelectionResult {
        trick: trick.clone(),
        variation,
        entrance,
        total_difficulty: total.min(ceiling) as u8,
    }
}

/// Uniform pick from `in_budget`, preferring the subset inside the
/// preference band; falls back to the whole budget subset when the band
/// filter empties it.
fn pick_banded<'a, T: HasDifficulty, R: Rng>(
    in_budget: &[&'a T],
    preference: DifficultyPreference,
    rng: &mut R,
) -> Option<&'a T> {
    if in_budget.is_empty() {
        return None;
    }
    let banded: Vec<&T> = in_budget
        .iter()
        .copied()
        .filter(|m| preference.modifier_band_contains(m.difficulty()))
        .collect();
    let pool: &[&T] = if banded.is_empty() { in_budget } else { banded.as_slice() };
    Some(pool[rng.gen_range(0..pool.len())])
}

/// Shared difficulty accessor for the two modifier kinds.
trait HasDifficulty {
    fn difficulty(&self) -> u8;
}

impl HasDifficulty for Variation {
    fn difficulty(&self) -> u8 {
        self.difficulty
    }
}

impl HasDifficulty for Entrance {
    fn difficulty(&self) -> u8 {
        self.difficulty
    }
}
