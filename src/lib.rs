mod board;
pub mod engine;
mod error;
mod pattern;
mod render;
mod runner;
mod utils;

pub use board::{Board, Cell, SIDE};
pub use engine::{count_live_neighbors, next_generation, step};
pub use error::LifeError;
pub use pattern::Pattern;
pub use render::TextRenderer;
pub use runner::Runner;
pub use utils::Config;
