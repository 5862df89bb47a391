//! # Cờ cá ngựa
//!
//! Rule engine for the Vietnamese horse-race board game, a Pachisi relative
//! played by four colors with two dice. Dice are supplied from outside; the
//! engine resolves movability, captures, home-lane entry and the win
//! condition, and ships two bot policies plus a match simulator.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board geometry, dice, move resolver, match state
//! - [`ai`] — Agent trait and bot policies (capture-first, random)
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
