//! Imp - Terminal-Based Virtual Demon Pet
//!
//! This module exposes the simulation core for the binaries and for testing.

pub mod build_info;
pub mod core;
pub mod event_log;
pub mod names;
pub mod rng;
pub mod simulator;

// UI is exposed only because the interactive binary links against the library
pub mod ui;
