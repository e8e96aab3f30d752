//! Terminal Finger Battle runner.
//!
//! Two players share the keyboard. The loop blocks on key events: the
//! board only changes when someone presses a key, so there is no tick.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use finger_battle::core::GameState;
use finger_battle::input::{Menu, MenuEvent};
use finger_battle::term::{GameView, TerminalRenderer};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game_state = GameState::new();
    let mut menu = Menu::new();
    let view = GameView::new();

    loop {
        term.draw(&view.render(&game_state, &menu))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match menu.handle_key(key.code, &game_state) {
                    MenuEvent::Action(action) => {
                        if let Err(err) = game_state.apply_action(action) {
                            menu.set_status(err.as_str());
                        }
                    }
                    MenuEvent::Quit => return Ok(()),
                    MenuEvent::Reject(_) | MenuEvent::Nothing => {}
                }
            }
            Event::Resize(..) => {
                // Next draw repaints the whole screen anyway.
            }
            _ => {}
        }
    }
}
