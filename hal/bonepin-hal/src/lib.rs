//! bonepin Hardware Abstraction Layer
//!
//! This crate defines the board-agnostic half of the pin layer: the value
//! types shared by every pin kind, the [`gpio::GpioPin`] capability trait,
//! the error taxonomy, and the whole-file read/write primitive that all
//! kernel-exposed pin resources go through.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Components (bonepin-drivers)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  bonepin-hal-beaglebone (pins, paths)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  bonepin-hal (this crate - traits, fs)  │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   SysfsFs     │       │   MemoryFs    │
//! │  (real board) │       │   (tests)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`gpio`] - Pin values, directions, kinds and the capability trait
//! - [`fs`] - The [`fs::FileAccess`] primitive and an in-memory implementation
//! - [`error`] - [`PinError`] and the crate [`Result`] alias

#![deny(unsafe_code)]

pub mod error;
pub mod fs;
pub mod gpio;

// Re-export key types at crate root for convenience
pub use error::{PinError, Result};
pub use fs::{FileAccess, MemoryFs};
pub use gpio::{Direction, GpioPin, PinKind, PinValue};
