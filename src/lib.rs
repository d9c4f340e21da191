#![cfg_attr(not(feature = "std"), no_std)]

mod board;
mod common;
mod config;
mod grid;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod render;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use render::*;
pub use ship::*;
