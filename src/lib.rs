#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod coord;
mod game;
mod render;
mod ship;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod driver;
#[cfg(feature = "std")]
mod logging;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use render::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use driver::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
