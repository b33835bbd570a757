#[macro_use]
mod macros;

pub mod config;
pub mod dial;
pub mod export;
pub mod gui;
