//! Configuration types
//!
//! Board-level settings read from a TOML file. Every field has a default
//! matching a stock BeagleBone Black, so an empty file is a valid config.

pub mod board;

pub use board::*;
