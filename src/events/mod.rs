//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: calls to the movies API and applying their results
//! - Terminal events: key presses and ticks

pub mod network;
pub mod terminal;
