//! End-of-game standings and history aggregates.

use serde::{Deserialize, Serialize};

use crate::game::session::Player;
use crate::trick_engine::models::TrickAttempt;

/// One row of the final standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub name: String,
    pub letters: String,
    pub eliminated: bool,
}

/// Everything the game-over report needs, computed once when a session
/// ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Survivors first (fewest letters leading), eliminated players last.
    /// Ties keep roster order.
    pub standings: Vec<PlayerStanding>,
    /// The leading survivor; `None` when nobody survived (single-player
    /// sessions end by elimination).
    pub winner: Option<String>,
    pub total_attempts: usize,
    pub landed: usize,
    /// Landed / total attempts, in 0.0..=1.0; 0.0 for an empty history.
    pub success_rate: f64,
}

pub(crate) fn summarize(players: &[Player], history: &[TrickAttempt]) -> GameSummary {
    let mut order: Vec<&Player> = players.iter().collect();
    order.sort_by_key(|p| (p.is_eliminated(), p.letters().len()));

    let standings: Vec<PlayerStanding> = order
        .iter()
        .map(|p| PlayerStanding {
            name: p.name().to_string(),
            letters: p.letter_string(),
            eliminated: p.is_eliminated(),
        })
        .collect();

    let winner = standings
        .first()
        .filter(|s| !s.eliminated)
        .map(|s| s.name.clone());

    let total_attempts = history.len();
    let landed = history.iter().filter(|a| a.success).count();

    GameSummary {
        standings,
        winner,
        total_attempts,
        landed,
        success_rate: success_rate(history),
    }
}

/// Per-player aggregate over an attempt history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub name: String,
    pub attempts: usize,
    pub landed: usize,
    pub failed: usize,
    /// Landed / attempts, in 0.0..=1.0.
    pub success_rate: f64,
}

/// Aggregate a history into one row per player, ordered by each player's
/// first appearance in the history.
pub fn player_stats(history: &[TrickAttempt]) -> Vec<PlayerStats> {
    let mut rows: Vec<PlayerStats> = Vec::new();
    for attempt in history {
        let idx = match rows.iter().position(|r| r.name == attempt.player_name) {
            Some(idx) => idx,
            None => {
                rows.push(PlayerStats {
                    name: attempt.player_name.clone(),
                    attempts: 0,
                    landed: 0,
                    failed: 0,
                    success_rate: 0.0,
                });
                rows.len() - 1
            }
        };
        let row = &mut rows[idx];
        row.attempts += 1;
        if attempt.success {
            row.landed += 1;
        } else {
            row.failed += 1;
        }
    }
    for row in &mut rows {
        row.success_rate = row.landed as f64 / row.attempts as f64;
    }
    rows
}

/// Overall landed/attempted ratio for a history; 0.0 when empty.
pub fn success_rate(history: &[TrickAttempt]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    history.iter().filter(|a| a.success).count() as f64 / history.len() as f64
}
