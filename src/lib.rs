//! Terminal Snake on a wrapping grid where fruit kinds are worth different points.

pub mod audio;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;

pub use error::{Result, SnakeError};
