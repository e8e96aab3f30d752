//! Finger Battle: a terminal two-player finger-counting duel.
//!
//! `core` holds the rules engine, `input` the menu state machine,
//! `term` the rendering, and `types` the shared data types.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
