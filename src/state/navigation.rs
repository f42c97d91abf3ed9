//! Navigation-related state types.
//!
//! This module contains enums for views, focus targets and the panels of
//! the lists screen.

use super::detail::DetailTarget;

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum View {
    Search,
    Detail(DetailTarget),
    Lists,
    SignIn,
    Register,
    Account,
}

impl View {
    /// Views only shown to a signed-in viewer.
    ///
    pub fn requires_auth(&self) -> bool {
        matches!(self, View::Lists | View::Account)
    }

    /// Views only shown to a signed-out viewer.
    ///
    pub fn guest_only(&self) -> bool {
        matches!(self, View::SignIn | View::Register)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Search => "Search",
            View::Detail(DetailTarget::Movie(_)) => "Movie",
            View::Detail(DetailTarget::Tv(_)) => "TV Show",
            View::Detail(DetailTarget::Person(_)) => "Person",
            View::Lists => "My Lists",
            View::SignIn => "Sign in",
            View::Register => "Register",
            View::Account => "My Account",
        }
    }
}

/// Specifying the focus within the search view.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    SearchInput,
    Results,
}

/// Specifying the panels of the lists view.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ListsPanel {
    Lists,
    Items,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restricted_views() {
        assert!(View::Lists.requires_auth());
        assert!(View::Account.requires_auth());
        assert!(!View::Search.requires_auth());
        assert!(!View::Detail(DetailTarget::Movie(1)).requires_auth());
    }

    #[test]
    fn test_guest_views() {
        assert!(View::SignIn.guest_only());
        assert!(View::Register.guest_only());
        assert!(!View::Lists.guest_only());
    }

    #[test]
    fn test_view_titles() {
        assert_eq!(View::Detail(DetailTarget::Tv(1)).title(), "TV Show");
        assert_eq!(View::Lists.title(), "My Lists");
    }
}
