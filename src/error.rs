use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No catalog entries match the requested categories at all. A
    /// configuration error — callers must require at least one non-empty
    /// category upstream.
    #[error("no tricks available for the selected categories")]
    NoTricksAvailable,

    /// A game session needs at least one player.
    #[error("a game session requires at least one player")]
    NoPlayers,
}

pub type Result<T> = std::result::Result<T, EngineError>;
