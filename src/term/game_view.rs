//! GameView: maps `core::GameState` and the menu into a `Screen`.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, HandPair};
use crate::input::{Menu, MenuPhase};
use crate::term::screen::{Line, Screen, Span, TextColor, TextStyle};
use crate::types::{HandSide, Player};

/// Builds one frame per key event.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the current game state and menu phase into a frame.
    pub fn render(&self, state: &GameState, menu: &Menu) -> Screen {
        let mut screen = Screen::new();

        screen.push(Line::new(vec![Span::new(
            "===== FINGER BATTLE =====",
            TextStyle::bold(),
        )]));
        screen.push_empty();

        self.push_player_line(&mut screen, state, Player::A);
        self.push_player_line(&mut screen, state, Player::B);
        screen.push_empty();

        if state.is_game_over() {
            self.push_winner(&mut screen, state);
        } else {
            self.push_menu(&mut screen, state, menu);
        }

        if let Some(message) = menu.status() {
            screen.push_empty();
            screen.push(Line::new(vec![Span::new(
                message,
                TextStyle::colored(TextColor::Danger),
            )]));
        }

        screen
    }

    fn push_player_line(&self, screen: &mut Screen, state: &GameState, player: Player) {
        let pair = state.hand(player);
        let is_mover = state.current_player() == player && !state.is_game_over();

        let mut spans = Vec::new();
        let name_style = if is_mover {
            TextStyle {
                color: TextColor::Highlight,
                bold: true,
                dim: false,
            }
        } else {
            TextStyle::default()
        };
        spans.push(Span::new(format!("player {}  ", player.as_str()), name_style));
        spans.push(hand_span("left", pair, HandSide::Left));
        spans.push(Span::plain("  "));
        spans.push(hand_span("right", pair, HandSide::Right));
        if is_mover {
            spans.push(Span::new("  <- to move", TextStyle::dim()));
        }

        screen.push(Line::new(spans));
    }

    fn push_menu(&self, screen: &mut Screen, state: &GameState, menu: &Menu) {
        match menu.phase() {
            MenuPhase::ChooseMove => {
                let them = state.opponent_hand();
                screen.push_plain("choose a move:");
                screen.push(option_line('1', "attack their left", them, HandSide::Left));
                screen.push(option_line('2', "attack their right", them, HandSide::Right));
                screen.push_plain(format!(
                    "  3  split your {} fingers",
                    state.current_hand().total()
                ));
                screen.push(Line::new(vec![Span::new("  q  quit", TextStyle::dim())]));
            }
            MenuPhase::ChooseWeapon { target } => {
                let own = state.current_hand();
                screen.push_plain(format!("attack their {} hand with:", target.as_str()));
                screen.push(option_line('1', "your left", own, HandSide::Left));
                screen.push(option_line('2', "your right", own, HandSide::Right));
                screen.push(Line::new(vec![Span::new("  esc  back", TextStyle::dim())]));
            }
            MenuPhase::ChooseSplit => {
                let total = state.current_hand().total();
                screen.push_plain(format!(
                    "press the new left-hand count (0-{total}); the right takes the rest"
                ));
                screen.push(Line::new(vec![Span::new("  esc  back", TextStyle::dim())]));
            }
        }
    }

    fn push_winner(&self, screen: &mut Screen, state: &GameState) {
        if let Some(winner) = state.winner() {
            screen.push(Line::new(vec![Span::new(
                format!("game over - player {} wins!", winner.as_str()),
                TextStyle {
                    color: TextColor::Highlight,
                    bold: true,
                    dim: false,
                },
            )]));
            screen.push_empty();
            screen.push(Line::new(vec![Span::new(
                "  r  play again    q  quit",
                TextStyle::dim(),
            )]));
        }
    }
}

fn hand_span(label: &str, pair: HandPair, side: HandSide) -> Span {
    let count = pair.get(side);
    if count == 0 {
        Span::new(format!("{label}: dead"), TextStyle::dim())
    } else {
        Span::plain(format!("{label}: {count}"))
    }
}

fn option_line(key: char, what: &str, pair: HandPair, side: HandSide) -> Line {
    let count = pair.get(side);
    let text = if count == 0 {
        format!("  {key}  {what} (dead)")
    } else {
        format!("  {key}  {what} ({count})")
    };
    let style = if count == 0 {
        TextStyle::dim()
    } else {
        TextStyle::default()
    };
    Line::new(vec![Span::new(text, style)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;
    use crossterm::event::KeyCode;

    #[test]
    fn renders_banner_and_both_players() {
        let view = GameView::new();
        let text = view.render(&GameState::new(), &Menu::new()).text();

        assert!(text.contains("FINGER BATTLE"));
        assert!(text.contains("player A"));
        assert!(text.contains("player B"));
        assert!(text.contains("to move"));
    }

    #[test]
    fn top_menu_lists_all_three_moves() {
        let view = GameView::new();
        let text = view.render(&GameState::new(), &Menu::new()).text();

        assert!(text.contains("attack their left"));
        assert!(text.contains("attack their right"));
        assert!(text.contains("split your 2 fingers"));
    }

    #[test]
    fn dead_hands_render_as_dead() {
        let mut state = GameState::new();
        state.redistribute(0, 2).unwrap(); // A = (0,2), B to move

        let view = GameView::new();
        let text = view.render(&state, &Menu::new()).text();
        assert!(text.contains("left: dead"));
    }

    #[test]
    fn weapon_phase_shows_own_hands() {
        let state = GameState::new();
        let mut menu = Menu::new();
        menu.handle_key(KeyCode::Char('1'), &state);

        let text = GameView::new().render(&state, &menu).text();
        assert!(text.contains("attack their left hand with:"));
        assert!(text.contains("your left (1)"));
        assert!(text.contains("your right (1)"));
    }

    #[test]
    fn split_phase_shows_total_range() {
        let state = GameState::new();
        let mut menu = Menu::new();
        menu.handle_key(KeyCode::Char('3'), &state);

        let text = GameView::new().render(&state, &menu).text();
        assert!(text.contains("(0-2)"));
    }

    #[test]
    fn status_line_appears_after_rejection() {
        let state = GameState::new();
        let mut menu = Menu::new();
        menu.set_status("a split must keep your finger total");

        let text = GameView::new().render(&state, &menu).text();
        assert!(text.contains("a split must keep your finger total"));
    }

    #[test]
    fn winner_screen_replaces_menu() {
        let mut state = GameState::new();
        state.attack(HandSide::Left, HandSide::Left).unwrap();
        state.attack(HandSide::Left, HandSide::Left).unwrap();
        state.attack(HandSide::Left, HandSide::Left).unwrap();
        state.attack(HandSide::Right, HandSide::Left).unwrap();
        state.attack(HandSide::Left, HandSide::Right).unwrap();
        assert!(state.is_game_over());

        let text = GameView::new().render(&state, &Menu::new()).text();
        assert!(text.contains("player A wins!"));
        assert!(text.contains("play again"));
        assert!(!text.contains("choose a move"));
    }

    #[test]
    fn restart_clears_winner_screen() {
        let mut state = GameState::new();
        state.attack(HandSide::Left, HandSide::Left).unwrap();
        state.attack(HandSide::Left, HandSide::Left).unwrap();
        state.attack(HandSide::Left, HandSide::Left).unwrap();
        state.attack(HandSide::Right, HandSide::Left).unwrap();
        state.attack(HandSide::Left, HandSide::Right).unwrap();

        state.apply_action(GameAction::Restart).unwrap();
        let text = GameView::new().render(&state, &Menu::new()).text();
        assert!(text.contains("choose a move"));
    }
}
