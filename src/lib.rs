//! Terminal client for browsing movies, TV shows and people, with personal
//! watch lists kept on the movies API.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod search;
pub mod state;
pub mod store;
pub mod ui;
pub mod utils;
