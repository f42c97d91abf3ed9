use super::Frame;
use crate::state::{State, View};
use crate::store::ApiResponse;
use crate::ui::widgets::{spinner::spinner, styling};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

/// Render the navigation tabs and the viewer's identity.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(36)])
        .split(size);

    let account = if state.is_authenticated() {
        "3 Account"
    } else {
        "3 Sign in"
    };
    let selected = match state.current_view() {
        View::Search | View::Detail(_) => 0,
        View::Lists => 1,
        View::SignIn | View::Register | View::Account => 2,
    };
    let tabs = Tabs::new(vec!["1 Search", "2 Lists", account])
        .select(selected)
        .style(styling::muted_text_style(theme))
        .highlight_style(styling::heading_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Movies ")
                .title_style(styling::active_block_title_style())
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(tabs, chunks[0]);

    let identity = match state.auth() {
        ApiResponse::Pending => Line::from(spinner(
            state.get_spinner_index(),
            "Checking session",
            theme,
        )),
        ApiResponse::Resolved(_) => match state.viewer() {
            Some(user) => Line::from(vec![
                Span::styled("Signed in as ", styling::muted_text_style(theme)),
                Span::styled(user.name.clone(), styling::normal_text_style(theme)),
            ]),
            None => Line::from(Span::styled("Not signed in", styling::muted_text_style(theme))),
        },
        ApiResponse::Rejected(_) => Line::from(Span::styled(
            "Session unavailable",
            styling::error_text_style(theme),
        )),
    };
    let paragraph = Paragraph::new(identity).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(paragraph, chunks[1]);
}
