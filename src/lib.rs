//! # ML Reversi
//!
//! A Reversi (Othello) rules engine built as the environment for self-play
//! reinforcement learning: legal-move enumeration, capture simulation,
//! pass handling and scoring, plus a 4-plane state encoding for a learned
//! model.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, capture rules, state machine
//! - [`ai`] — Agent trait, random and greedy agents, state encoding
//! - [`training`] — Reference game driver, self-play example recording, metrics
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod training;
