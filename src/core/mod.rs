//! Core module - pure game logic with no external dependencies
//!
//! This module contains the rules of the finger-counting duel: hand
//! arithmetic, move validation, turn switching, and win detection.
//! It has zero dependencies on UI or I/O.

pub mod game_state;
pub mod hand;

// Re-export commonly used types
pub use game_state::GameState;
pub use hand::{normalize_fingers, HandPair};
