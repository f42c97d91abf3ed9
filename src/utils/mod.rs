//! Utility functions for the application.
//!
//! Formatting of content payloads, dates and text used by state and rendering.

pub mod dates;
pub mod format;
pub mod text;

pub use format::MediaItem;
