//! Sanaruutu - a 4x4 Finnish word grid game for the terminal
//!
//! Roll the dice, trace adjacent letters, find words before the clock runs out.

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod network;
pub mod tui;
