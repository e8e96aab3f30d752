//! Hand pair - one player's two finger counts

use crate::types::{HandSide, HAND_WRAP, STARTING_FINGERS};

/// Map a raw summed finger count into the valid range.
///
/// Exactly 5 wraps to 0 (the hand dies); above 5 loses 5. Attack sums
/// never exceed 9 (both operands are at most 4 and the attacker is
/// nonzero), so a single subtraction is enough.
pub fn normalize_fingers(count: u8) -> u8 {
    if count == HAND_WRAP {
        0
    } else if count > HAND_WRAP {
        count - HAND_WRAP
    } else {
        count
    }
}

/// A player's two hands. Stored counts are always in [0,4].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandPair {
    left: u8,
    right: u8,
}

impl HandPair {
    /// Both hands at the starting count
    pub fn new() -> Self {
        Self {
            left: STARTING_FINGERS,
            right: STARTING_FINGERS,
        }
    }

    /// Build a pair from raw counts, normalizing each side
    pub fn from_counts(left: u8, right: u8) -> Self {
        Self {
            left: normalize_fingers(left),
            right: normalize_fingers(right),
        }
    }

    pub fn left(&self) -> u8 {
        self.left
    }

    pub fn right(&self) -> u8 {
        self.right
    }

    /// Finger count of one hand
    pub fn get(&self, side: HandSide) -> u8 {
        match side {
            HandSide::Left => self.left,
            HandSide::Right => self.right,
        }
    }

    /// Overwrite one hand, normalizing the new count
    pub fn set(&mut self, side: HandSide, count: u8) {
        let count = normalize_fingers(count);
        match side {
            HandSide::Left => self.left = count,
            HandSide::Right => self.right = count,
        }
    }

    /// Total fingers across both hands
    pub fn total(&self) -> u8 {
        self.left + self.right
    }

    /// Both hands at zero means this player is out
    pub fn is_eliminated(&self) -> bool {
        self.left == 0 && self.right == 0
    }
}

impl Default for HandPair {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HandPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.left, self.right)
    }
}
