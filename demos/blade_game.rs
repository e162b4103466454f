//! A complete scripted game of BLADE.
//!
//! Run with:
//!   cargo run --example blade_game
//!
//! Four players attempt tricks; the script lands or bails each attempt
//! deterministically, so the whole game — draws, letters, adaptation,
//! standings — replays identically every run.

use blade_trick_gen::game::{player_stats, AttemptOutcome, GameSession, GameSettings};
use blade_trick_gen::DifficultyPreference;

fn divider(ch: char, n: usize) {
    println!("{}", ch.to_string().repeat(n));
}

/// Scripted outcome: player skill minus a rising round pressure.
/// Stronger players land longer; everyone cracks eventually.
fn lands(player: &str, attempt_no: usize) -> bool {
    let skill = match player {
        "Mika"  => 4,
        "Jonas" => 3,
        "Sara"  => 2,
        _       => 1, // Pete
    };
    (attempt_no + skill) % 5 != 0 && (attempt_no % (skill + 2)) != 0
}

fn main() {
    let names = vec![
        "Mika".to_string(),
        "Jonas".to_string(),
        "Sara".to_string(),
        "Pete".to_string(),
    ];
    let settings = GameSettings {
        difficulty_preference: DifficultyPreference::Easy,
        ..GameSettings::default()
    };

    let mut session =
        GameSession::new(names, settings, Some(404)).expect("roster and categories are valid");

    divider('═', 66);
    println!("  BLADE — four players, seed 404");
    divider('═', 66);
    println!();

    let mut attempt_no = 0usize;
    let summary = loop {
        attempt_no += 1;
        let player = session.current_player().name().to_string();
        let round = session.current_round().clone();
        let success = lands(&player, attempt_no);

        println!(
            "  R{:<3} {:<6} {:<36} [{}]",
            session.round_number(),
            player,
            round.display_name(),
            if success { "landed" } else { "bailed" },
        );

        match session.record_attempt(success).expect("session stays valid") {
            AttemptOutcome::Continued { letter, new_round } => {
                if let Some(letter) = letter {
                    println!("       {player} takes a letter: {letter}");
                }
                if new_round {
                    println!();
                }
            }
            AttemptOutcome::GameOver(summary) => break summary,
        }
    };

    println!();
    divider('─', 66);
    println!("  GAME OVER after {} attempts", summary.total_attempts);
    match &summary.winner {
        Some(winner) => println!("  Winner: {winner}"),
        None => println!("  Nobody survived"),
    }
    println!(
        "  Landed {} of {} ({:.0}%)",
        summary.landed,
        summary.total_attempts,
        summary.success_rate * 100.0
    );
    println!();

    println!("  STANDINGS");
    for (place, standing) in summary.standings.iter().enumerate() {
        let letters = if standing.letters.is_empty() { "-" } else { standing.letters.as_str() };
        println!("    {}. {:<6} {letters}", place + 1, standing.name);
    }
    println!();

    println!("  PER-PLAYER STATS");
    for row in player_stats(session.history()) {
        println!(
            "    {:<6} {} attempts, {} landed ({:.0}%)",
            row.name,
            row.attempts,
            row.landed,
            row.success_rate * 100.0
        );
    }
    divider('═', 66);
}
