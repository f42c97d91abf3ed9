//! Application state management module.
//!
//! This module contains the core state of the application, including:
//! - Main `State` struct owning the auth, list and list-modal stores
//! - Navigation types (View, Focus, ListsPanel)
//! - Form editing types (AuthForm, ListForm, ListModalForm)
//! - Detail views and the request tokens that keep late results out

mod detail;
mod form;
mod modal;
mod navigation;
mod notification;
mod request;

pub use detail::{CreditsData, DetailData, DetailState, DetailTarget};
pub use form::{input_text, text_input, AuthForm, FormField, FormKind, ListForm, ListFormMode};
pub use modal::{default_target_list, ListModalForm};
pub use navigation::{Focus, ListsPanel, View};
pub use notification::{Notification, NotificationKind, NOTIFICATION_TICKS};
pub use request::{RequestToken, RequestTracker};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
