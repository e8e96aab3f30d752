//! Input module - turns key presses into game actions
//!
//! The menu is a small state machine over `crossterm::event::KeyCode`.
//! It owns no I/O, so the full key flow is unit-testable.

pub mod menu;

pub use menu::{Menu, MenuEvent, MenuPhase};
