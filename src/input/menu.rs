//! Menu state machine for the interactive terminal game.
//!
//! Moves take two key presses: first the target (or the split option),
//! then the attacking hand or the new left-hand count. Esc/Backspace
//! steps back one phase. Dead attacking hands are filtered here so the
//! core's `DeadHand` rejection stays a backstop; dead *targets* remain
//! selectable, since striking a dead hand revives it.

use crossterm::event::KeyCode;

use crate::core::GameState;
use crate::types::{GameAction, HandSide};

/// Where the player is in the move-selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    /// Top menu: pick an opponent hand to attack, or the split option
    ChooseMove,
    /// An attack target is picked; pick the attacking hand
    ChooseWeapon { target: HandSide },
    /// Split picked; pick the new left-hand count (right is derived)
    ChooseSplit,
}

/// What a key press produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// A complete move, ready for the rules engine
    Action(GameAction),
    /// The key named something illegal; the phase is unchanged
    Reject(&'static str),
    /// The player asked to leave
    Quit,
    /// Key did nothing in this phase
    Nothing,
}

/// Tracks the move-selection flow between key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    phase: MenuPhase,
    status: Option<&'static str>,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            phase: MenuPhase::ChooseMove,
            status: None,
        }
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    /// Message for the status line, if the last move was rejected
    pub fn status(&self) -> Option<&'static str> {
        self.status
    }

    /// Surface a rejection from the rules engine on the status line
    pub fn set_status(&mut self, message: &'static str) {
        self.status = Some(message);
    }

    /// Route one key press through the current phase.
    pub fn handle_key(&mut self, code: KeyCode, state: &GameState) -> MenuEvent {
        self.status = None;

        if state.is_game_over() {
            return match code {
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.phase = MenuPhase::ChooseMove;
                    MenuEvent::Action(GameAction::Restart)
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => MenuEvent::Quit,
                _ => MenuEvent::Nothing,
            };
        }

        // Quit works from any phase.
        if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            return MenuEvent::Quit;
        }

        match self.phase {
            MenuPhase::ChooseMove => self.handle_choose_move(code),
            MenuPhase::ChooseWeapon { target } => self.handle_choose_weapon(code, target, state),
            MenuPhase::ChooseSplit => self.handle_choose_split(code, state),
        }
    }

    fn handle_choose_move(&mut self, code: KeyCode) -> MenuEvent {
        match code {
            KeyCode::Char('1') => {
                self.phase = MenuPhase::ChooseWeapon {
                    target: HandSide::Left,
                };
                MenuEvent::Nothing
            }
            KeyCode::Char('2') => {
                self.phase = MenuPhase::ChooseWeapon {
                    target: HandSide::Right,
                };
                MenuEvent::Nothing
            }
            KeyCode::Char('3') => {
                self.phase = MenuPhase::ChooseSplit;
                MenuEvent::Nothing
            }
            KeyCode::Esc => MenuEvent::Quit,
            _ => MenuEvent::Nothing,
        }
    }

    fn handle_choose_weapon(
        &mut self,
        code: KeyCode,
        target: HandSide,
        state: &GameState,
    ) -> MenuEvent {
        let with = match code {
            KeyCode::Char('1') => HandSide::Left,
            KeyCode::Char('2') => HandSide::Right,
            KeyCode::Esc | KeyCode::Backspace => {
                self.phase = MenuPhase::ChooseMove;
                return MenuEvent::Nothing;
            }
            _ => return MenuEvent::Nothing,
        };

        if state.current_hand().get(with) == 0 {
            return self.reject("a dead hand cannot attack");
        }

        self.phase = MenuPhase::ChooseMove;
        MenuEvent::Action(GameAction::Attack { with, target })
    }

    fn handle_choose_split(&mut self, code: KeyCode, state: &GameState) -> MenuEvent {
        let left = match code {
            KeyCode::Char(c @ '0'..='9') => c as u8 - b'0',
            KeyCode::Esc | KeyCode::Backspace => {
                self.phase = MenuPhase::ChooseMove;
                return MenuEvent::Nothing;
            }
            _ => return MenuEvent::Nothing,
        };

        let total = state.current_hand().total();
        if left > total {
            return self.reject("that is more fingers than you have");
        }

        self.phase = MenuPhase::ChooseMove;
        MenuEvent::Action(GameAction::Split {
            left,
            right: total - left,
        })
    }

    fn reject(&mut self, message: &'static str) -> MenuEvent {
        self.status = Some(message);
        MenuEvent::Reject(message)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
