//! The BLADE game session — letters, elimination, turn rotation, and
//! per-round trick draws.
//!
//! A session owns all of its state (players, history, used-trick set,
//! adaptive preference, RNG); the engine underneath is stateless, so any
//! number of sessions can run side by side over the shared catalog.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::game::settings::GameSettings;
use crate::game::stats::{summarize, GameSummary};
use crate::trick_engine::adaptive::adjust_difficulty_preference;
use crate::trick_engine::models::{DifficultyPreference, SelectionResult, TrickAttempt};
use crate::trick_engine::{catalog, selector};

/// Failures earn these letters in order; holding all five eliminates the
/// player.
pub const ELIMINATION_WORD: &str = "BLADE";

/// One contestant in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    letters: Vec<char>,
}

impl Player {
    fn new(name: String) -> Self {
        Player { name, letters: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Letters earned so far, oldest first.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn letter_string(&self) -> String {
        self.letters.iter().collect()
    }

    pub fn is_eliminated(&self) -> bool {
        self.letters.len() >= ELIMINATION_WORD.len()
    }
}

/// What one recorded attempt did to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    /// The game goes on. `letter` is the letter just earned (failures
    /// only); `new_round` is true when the turn wrapped and a fresh trick
    /// was drawn.
    Continued {
        letter: Option<char>,
        new_round: bool,
    },
    /// The session just ended; final standings attached.
    GameOver(GameSummary),
}

/// A running game of BLADE.
#[derive(Debug)]
pub struct GameSession {
    players: Vec<Player>,
    current_player_index: usize,
    current_round: SelectionResult,
    used_trick_ids: HashSet<u32>,
    round_number: u32,
    history: Vec<TrickAttempt>,
    settings: GameSettings,
    preference: DifficultyPreference,
    rng: StdRng,
}

impl GameSession {
    /// Start a session: validate the roster, seed the RNG, and draw the
    /// opening trick.
    ///
    /// Blank player names are dropped; an empty roster after that is
    /// [`EngineError::NoPlayers`]. A single-player roster runs as a
    /// training session: the same player attempts a fresh trick every
    /// turn. `rng_seed: Some(_)` makes the whole game reproducible.
    pub fn new(
        player_names: Vec<String>,
        settings: GameSettings,
        rng_seed: Option<u64>,
    ) -> Result<Self> {
        let players: Vec<Player> = player_names
            .into_iter()
            .filter(|n| !n.trim().is_empty())
            .map(Player::new)
            .collect();
        if players.is_empty() {
            return Err(EngineError::NoPlayers);
        }

        let mut rng: StdRng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        let preference = settings.difficulty_preference;
        let trick = selector::next_trick(
            catalog::all_tricks(),
            &settings.selected_categories,
            &HashSet::new(),
            preference,
            settings.max_difficulty,
            &mut rng,
        )?;
        let current_round = selector::attach_modifiers(
            trick,
            preference,
            settings.max_difficulty,
            settings.include_variation,
            settings.include_entrance,
            &mut rng,
        );
        let used_trick_ids = HashSet::from([current_round.trick.id]);

        Ok(GameSession {
            players,
            current_player_index: 0,
            current_round,
            used_trick_ids,
            round_number: 1,
            history: Vec::new(),
            settings,
            preference,
            rng,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// The trick (plus modifiers) on the table this round.
    pub fn current_round(&self) -> &SelectionResult {
        &self.current_round
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn history(&self) -> &[TrickAttempt] {
        &self.history
    }

    pub fn difficulty_preference(&self) -> DifficultyPreference {
        self.preference
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Nudge the difficulty ceiling mid-game.
    pub fn adjust_max_difficulty(&mut self, delta: i8) {
        self.settings.adjust_max_difficulty(delta);
    }

    /// Standings as they look right now.
    pub fn summary(&self) -> GameSummary {
        summarize(&self.players, &self.history)
    }

    /// Record the current player's attempt at the current trick.
    ///
    /// Adapts the preference band from the history *before* this attempt
    /// (the attempt's own outcome only picks the ratchet direction),
    /// appends the attempt, hands out a letter on failure, and either ends
    /// the game or advances the turn — drawing a fresh trick whenever the
    /// turn wraps around the roster.
    pub fn record_attempt(&mut self, success: bool) -> Result<AttemptOutcome> {
        let player_name = self.players[self.current_player_index].name.clone();

        self.preference = adjust_difficulty_preference(
            &self.history,
            &player_name,
            success,
            self.preference,
        );
        self.history.push(TrickAttempt {
            trick_id: self.current_round.trick.id,
            success,
            player_name,
            round_number: self.round_number,
        });

        let mut letter = None;
        if !success {
            let player = &mut self.players[self.current_player_index];
            if let Some(next_letter) = ELIMINATION_WORD.chars().nth(player.letters.len()) {
                player.letters.push(next_letter);
                letter = Some(next_letter);
            }
        }

        let active = self.players.iter().filter(|p| !p.is_eliminated()).count();
        let game_over = if self.players.len() == 1 {
            active == 0
        } else {
            active <= 1
        };
        if game_over {
            return Ok(AttemptOutcome::GameOver(self.summary()));
        }

        // Next non-eliminated player; wrapping past the end of the roster
        // closes the round.
        let mut next = (self.current_player_index + 1) % self.players.len();
        while self.players[next].is_eliminated() {
            next = (next + 1) % self.players.len();
        }
        let wrapped = next <= self.current_player_index;

        if wrapped {
            self.start_next_round()?;
        }
        self.current_player_index = next;

        Ok(AttemptOutcome::Continued { letter, new_round: wrapped })
    }

    fn start_next_round(&mut self) -> Result<()> {
        let trick = selector::next_trick(
            catalog::all_tricks(),
            &self.settings.selected_categories,
            &self.used_trick_ids,
            self.preference,
            self.settings.max_difficulty,
            &mut self.rng,
        )?;
        self.current_round = selector::attach_modifiers(
            trick,
            self.preference,
            self.settings.max_difficulty,
            self.settings.include_variation,
            self.settings.include_entrance,
            &mut self.rng,
        );
        self.used_trick_ids.insert(self.current_round.trick.id);
        self.round_number += 1;
        Ok(())
    }
}
