//! Marvel Clue: a terminal whodunit
//!
//! A hero has been found dead. Somebody did it, somewhere, with something.
//! You get five clues to work out who, where and with what before you
//! name the culprit.
//!
//! # Game Mechanics
//!
//! - **Interrogation**: Question a suspect, a location or a weapon
//! - **Elimination clues**: Learn that one innocent value is not the answer
//! - **Shared budget**: Interrogations and clues draw from the same five clues
//! - **One accusation**: A single guess closes the case, right or wrong
//!
//! # Architecture
//!
//! - `data` - Entity catalogues, solution, alibi records, portraits
//! - `game` - Game state, narrative templates, interrogation reports
//! - `config` - Runtime configuration
//! - `tui` - Terminal user interface with ratatui

pub mod config;
pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::GameState;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the application layer
pub type Result<T> = anyhow::Result<T>;

/// Result type for game operations
pub type GameResult<T> = std::result::Result<T, GameError>;

/// Recoverable, player-facing failures of a game operation.
///
/// None of these change the game state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No clues left. Time to make your guess.")]
    BudgetExhausted,

    #[error("Every innocent name has already been ruled out.")]
    NoCluesRemaining,

    #[error("Pick a suspect, a location and a weapon before guessing.")]
    IncompleteGuess,

    #[error("This case is closed. Start a new game to play again.")]
    GameResolved,

    #[error("Unknown {category}: {name}")]
    UnknownEntity { category: Category, name: String },
}
