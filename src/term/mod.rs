//! Terminal module - rendering for the interactive game
//!
//! `GameView` maps state into a `Screen` (pure, unit-testable); the
//! `TerminalRenderer` flushes a `Screen` to the real terminal.

pub mod game_view;
pub mod renderer;
pub mod screen;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
pub use screen::{Line, Screen, Span, TextColor, TextStyle};
