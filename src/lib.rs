//! # Minimax Tic-Tac-Toe
//!
//! Tic-Tac-Toe with a provably optimal computer opponent. The engine is an
//! exhaustive minimax search with alpha-beta pruning; the game tree is at
//! most nine plies deep, so the search always plays perfectly and a game
//! against it can at best be drawn.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, immutable position transitions
//! - [`ai`] — Agent trait, alpha-beta engine, random baseline
//! - [`ui`] — Terminal UI for human-vs-computer play
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
