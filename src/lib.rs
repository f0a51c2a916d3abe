//! Chat-hosted board games: a battleship engine with a bot-facing match
//! host, plus tic-tac-toe and minesweeper engines, per-player win/loss
//! stats, and a virtual-currency ledger gating the hint feature.
//!
//! The chat transport itself (message delivery, inline keyboards, emoji
//! rendering) lives outside this crate behind the [`Messenger`] trait;
//! durable currency storage sits behind [`Ledger`].

mod board;
mod common;
mod config;
mod game;
mod ledger;
mod logging;
mod match_host;
mod messenger;
mod minesweeper;
mod ship;
mod stats;
mod tictactoe;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use ledger::*;
pub use logging::init_logging;
pub use match_host::*;
pub use messenger::*;
pub use minesweeper::*;
pub use ship::*;
pub use stats::*;
pub use tictactoe::*;
