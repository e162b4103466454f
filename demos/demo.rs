//! Guided tour of the trick engine.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `blade_trick_gen` works end to end:
//!
//! 1. **Minimal API** — `RoundRequest::new()` with nothing but a category
//!    list.
//! 2. **Preference comparison** — the same seed drawn under easy, medium,
//!    and hard, showing how the weighting shifts the picks.
//! 3. **One round per category** — a fixed-seed draw from each of the nine
//!    catalog categories.
//! 4. **Rotation** — `next_trick` walking a small pool dry and then
//!    resetting, the way a game session rotates tricks between rounds.
//!
//! ## Key concepts demonstrated
//!
//! - `rng_seed: Some(u64)` makes a draw fully deterministic.
//! - `total_difficulty` never exceeds the requested ceiling, variation and
//!   entrance included.
//! - Entrances carry a 30% skip chance, so they come and go round to round.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use blade_trick_gen::{
    draw_round, next_trick, DifficultyPreference, RoundRequest, TrickCategory,
};

/// Draw and pretty-print one round.
fn print_round(categories: Vec<TrickCategory>, preference: DifficultyPreference, max: u8, seed: u64) {
    let round = draw_round(
        RoundRequest {
            categories,
            difficulty_preference: preference,
            max_difficulty: max,
            include_variation: true,
            include_entrance: true,
            rng_seed: Some(seed),
        },
        &HashSet::new(),
    )
    .expect("categories are non-empty");

    println!("  {:<34} {}", round.display_name(), round.trick.category);
    println!(
        "    base {}  total {}/{}  preference {}",
        round.trick.difficulty, round.total_difficulty, max, preference
    );
    if let Some(v) = &round.variation {
        println!("    variation: {} (+{})", v.name, v.difficulty);
    }
    if let Some(e) = &round.entrance {
        println!("    entrance:  {} (+{})", e.name, e.difficulty);
    }
    println!();
}

fn main() {
    // ── Minimal API ────────────────────────────────────────────────────────
    // RoundRequest::new() only needs categories — everything else defaults
    // (medium preference, ceiling 30, both modifiers, entropy seed).
    println!();
    println!("══ Minimal API: RoundRequest::new() ══");
    println!();
    let round = draw_round(
        RoundRequest::new(vec![TrickCategory::SoulGrinds]),
        &HashSet::new(),
    )
    .expect("soul grinds are never empty");
    println!("  Random soul grind: {}", round.display_name());
    println!();

    // ── Preference comparison ──────────────────────────────────────────────
    // Same categories, same ceiling; only the weighting changes.
    println!("══ Preference comparison: grind categories, ceiling 8 ══");
    println!();
    let grinds = vec![
        TrickCategory::SoulGrinds,
        TrickCategory::GrooveGrinds,
        TrickCategory::SpecialGrinds,
        TrickCategory::TopsideGrinds,
    ];
    for preference in [
        DifficultyPreference::Easy,
        DifficultyPreference::Medium,
        DifficultyPreference::Hard,
    ] {
        print_round(grinds.clone(), preference, 8, 2024);
    }

    // ── One round per category ─────────────────────────────────────────────
    println!("══ One round per category (fixed seeds) ══");
    println!();
    for (i, category) in TrickCategory::ALL.into_iter().enumerate() {
        print_round(vec![category], DifficultyPreference::Medium, 10, 1000 + i as u64);
    }

    // ── Rotation ───────────────────────────────────────────────────────────
    // A session keeps a used-id set; once every eligible trick has been
    // played the pool resets instead of running dry.
    println!("══ Rotation: soul grinds until the pool resets ══");
    println!();
    let mut rng = StdRng::seed_from_u64(7);
    let mut used: HashSet<u32> = HashSet::new();
    for draw in 1..=9 {
        let trick = next_trick(
            blade_trick_gen::all_tricks(),
            &[TrickCategory::SoulGrinds],
            &used,
            DifficultyPreference::Medium,
            10,
            &mut rng,
        )
        .expect("soul grinds are never empty");
        let repeat = if used.contains(&trick.id) { "  (repeat — pool reset)" } else { "" };
        println!("  draw {draw}: {}{repeat}", trick.name);
        used.insert(trick.id);
    }
    println!();
}
