//! Terminal chess board editor.
//!
//! `domain` holds the positional model and has no terminal dependencies.
//! `ui` projects a board into display cells and paints them.

pub mod app;
pub mod config;
pub mod domain;
pub mod ui;
