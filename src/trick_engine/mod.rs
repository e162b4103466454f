//! Core trick engine — catalog access, weighted selection, and adaptive
//! difficulty.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | All shared types: tricks, modifiers, preference band, request/result structs |
//! | `catalog`  | The embedded 71-trick seed dataset and its read accessors |
//! | `selector` | Weighted roulette selection, modifier attachment, round rotation |
//! | `adaptive` | The easy/medium/hard ratchet driven by attempt history |
//! | `round`    | Single entry point `draw_round()` — seeds the RNG and runs a full draw |

pub mod adaptive;
pub mod catalog;
pub mod models;
pub mod round;
pub mod selector;

// Re-export the public API surface so callers can use
// `trick_engine::draw_round` without reaching into sub-modules.
pub use adaptive::adjust_difficulty_preference;
pub use catalog::{all_tricks, trick_by_id, tricks_by_category};
pub use models::{
    DifficultyPreference, Entrance, RoundRequest, SelectionResult, Trick,
    TrickAttempt, TrickCategory, Variation,
};
pub use round::draw_round;
pub use selector::{attach_modifiers, next_trick, select_weighted_trick};
