//! Game state module - the rules engine for the finger-counting duel
//!
//! Holds both players' hands and the turn marker, and applies attack and
//! split moves. Invalid moves are rejected without touching state or turn;
//! every successful move switches the turn exactly once.

use crate::core::hand::HandPair;
use crate::types::{GameAction, HandSide, MoveError, Player};

/// Complete game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    current: Player,
    a: HandPair,
    b: HandPair,
}

impl GameState {
    /// Starting position: both pairs at (1,1), player A to move
    pub fn new() -> Self {
        Self {
            current: Player::A,
            a: HandPair::new(),
            b: HandPair::new(),
        }
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    /// One player's hand pair
    pub fn hand(&self, player: Player) -> HandPair {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    /// The mover's hand pair
    pub fn current_hand(&self) -> HandPair {
        self.hand(self.current)
    }

    /// The non-mover's hand pair
    pub fn opponent_hand(&self) -> HandPair {
        self.hand(self.current.opponent())
    }

    fn hand_mut(&mut self, player: Player) -> &mut HandPair {
        match player {
            Player::A => &mut self.a,
            Player::B => &mut self.b,
        }
    }

    /// Attack one of the opponent's hands with one of your own.
    ///
    /// The attacking hand's count is added onto the target hand and the
    /// result is normalized (5 wraps to 0). A dead attacking hand is
    /// rejected; a dead *target* is legal and revives with the added
    /// fingers. Switches the turn on success.
    pub fn attack(&mut self, with: HandSide, target: HandSide) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let attacking = self.current_hand().get(with);
        if attacking == 0 {
            return Err(MoveError::DeadHand);
        }

        let opponent = self.current.opponent();
        let struck = self.hand(opponent).get(target) + attacking;
        self.hand_mut(opponent).set(target, struck);

        self.switch_turn();
        Ok(())
    }

    /// Redistribute the mover's total fingers between their own hands.
    ///
    /// Valid only if the new pair sums to the current total and is not the
    /// exact mirror of the current pair. Each new count is normalized
    /// independently, so a split onto 5 kills that hand (and a (5,0) split
    /// of a total of 5 self-eliminates). Switches the turn on success.
    pub fn redistribute(&mut self, new_left: u8, new_right: u8) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let hand = self.current_hand();
        if u16::from(new_left) + u16::from(new_right) != u16::from(hand.total()) {
            return Err(MoveError::TotalMismatch);
        }
        if new_left == hand.right() && new_right == hand.left() {
            return Err(MoveError::MirrorSwap);
        }

        *self.hand_mut(self.current) = HandPair::from_counts(new_left, new_right);

        self.switch_turn();
        Ok(())
    }

    /// Toggle whose turn it is
    pub fn switch_turn(&mut self) {
        self.current = self.current.opponent();
    }

    /// True once either player has lost both hands
    pub fn is_game_over(&self) -> bool {
        self.a.is_eliminated() || self.b.is_eliminated()
    }

    /// The surviving player, or None while the game is ongoing.
    ///
    /// At most one player can be eliminated: the turn ends immediately
    /// after the move that empties a pair.
    pub fn winner(&self) -> Option<Player> {
        if self.a.is_eliminated() {
            Some(Player::B)
        } else if self.b.is_eliminated() {
            Some(Player::A)
        } else {
            None
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> Result<(), MoveError> {
        match action {
            GameAction::Attack { with, target } => self.attack(with, target),
            GameAction::Split { left, right } => self.redistribute(left, right),
            GameAction::Restart => {
                *self = Self::new();
                Ok(())
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "player A: left={} right={}", self.a.left(), self.a.right())?;
        writeln!(f, "player B: left={} right={}", self.b.left(), self.b.right())?;
        write!(f, "turn: player {}", self.current.as_str())
    }
}
