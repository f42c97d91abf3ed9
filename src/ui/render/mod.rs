mod auth;
mod detail;
mod footer;
mod header;
mod lists;
mod log;
mod modal;
mod notification;
mod search;

use super::Frame;
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

/// Height of the log panel when shown.
///
const LOG_HEIGHT: u16 = 10;

/// Render every widget according to state.
///
pub fn render(frame: &mut Frame, state: &State) {
    let log_height = if state.is_log_visible() { LOG_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(log_height),
            Constraint::Length(1),
        ])
        .split(frame.size());

    header::header(frame, chunks[0], state);
    match state.current_view() {
        View::Search => search::search(frame, chunks[1], state),
        View::Detail(_) => detail::detail(frame, chunks[1], state),
        View::Lists => lists::lists(frame, chunks[1], state),
        View::SignIn | View::Register | View::Account => auth::auth(frame, chunks[1], state),
    }
    if state.is_log_visible() {
        log::log(frame, chunks[2], state);
    }
    footer::footer(frame, chunks[3], state);

    if state.list_modal().visible {
        modal::list_modal(frame, chunks[1], state);
    }
    notification::notification(frame, chunks[1], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AuthUser;
    use crate::state::DetailTarget;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_search_view_renders() {
        let state = State::default();
        let screen = draw(&state);
        assert!(screen.contains("Trending this week"));
        assert!(screen.contains("Loading results"));
    }

    #[test]
    fn test_sign_in_view_renders() {
        let mut state = State::default();
        state
            .complete_identity(Ok(AuthUser::Unauthenticated))
            .unwrap();
        state.open_sign_in();
        let screen = draw(&state);
        assert!(screen.contains("Email address"));
        assert!(screen.contains("Not signed in"));
    }

    #[test]
    fn test_detail_view_renders_while_loading() {
        let mut state = State::default();
        state.open_detail(DetailTarget::Person(287));
        assert!(draw(&state).contains("Person"));
    }

    #[test]
    fn test_log_panel_toggles() {
        let mut state = State::default();
        state.add_log_entry("INFO Fetching lists...".to_string());
        assert!(!draw(&state).contains("Fetching lists"));
        state.toggle_log();
        assert!(draw(&state).contains("Fetching lists"));
    }

    #[test]
    fn test_long_notification_fits_screen() {
        let mut state = State::default();
        state.notify(crate::state::Notification::info("x".repeat(70_000)));
        assert!(draw(&state).contains("xxxx"));
    }
}
