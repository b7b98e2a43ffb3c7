//! Conway's Game of Life on a bounded grid, with live parameter
//! adjustment and interactive cell editing.
//!
//! The simulation core is [`board::Board`] (a flat cell arena with
//! precomputed Moore-neighbor wiring), [`engine::next_generation`] (the
//! standard transition rule, always reading one buffer and writing a
//! distinct one), and [`controller::LifeGame`] (two alternating buffers,
//! an active-index flip per step, and the repeating timer). The egui
//! layer in [`ui`] is a thin collaborator on top of the controller.

pub mod board;
pub mod controller;
pub mod engine;
pub mod error;
pub mod patterns;
pub mod ui;

pub use board::{Board, Cell, MAX_SIZE, MIN_SIZE};
pub use controller::{LifeGame, MIN_PERIOD};
pub use error::{Error, Result};
