//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Finger count every hand starts with
pub const STARTING_FINGERS: u8 = 1;

/// Count at which a hand wraps around to zero (dies)
pub const HAND_WRAP: u8 = 5;

/// Player identities (A moves first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// The other player
    pub fn opponent(&self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Parse player from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a" => Some(Player::A),
            "b" => Some(Player::B),
            _ => None,
        }
    }

    /// Convert to display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::A => "A",
            Player::B => "B",
        }
    }
}

/// Which of a player's two hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSide {
    Left,
    Right,
}

impl HandSide {
    /// The other hand
    pub fn other(&self) -> Self {
        match self {
            HandSide::Left => HandSide::Right,
            HandSide::Right => HandSide::Left,
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(HandSide::Left),
            "right" | "r" => Some(HandSide::Right),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            HandSide::Left => "left",
            HandSide::Right => "right",
        }
    }
}

/// Game actions accepted by the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Attack one of the opponent's hands with one of your own
    Attack { with: HandSide, target: HandSide },
    /// Redistribute your total fingers between your own hands
    Split { left: u8, right: u8 },
    /// Reset the board to the starting position
    Restart,
}

/// Why a move was rejected (state and turn are left untouched)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The attacking hand has no fingers
    DeadHand,
    /// The split does not preserve the mover's finger total
    TotalMismatch,
    /// The split is the exact left/right exchange of the current pair
    MirrorSwap,
    /// A player is already eliminated
    GameOver,
}

impl MoveError {
    /// Status-line message shown to the player
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveError::DeadHand => "that hand is gone and cannot attack",
            MoveError::TotalMismatch => "a split must keep your finger total",
            MoveError::MirrorSwap => "swapping left and right is not allowed",
            MoveError::GameOver => "the game is already over",
        }
    }
}
