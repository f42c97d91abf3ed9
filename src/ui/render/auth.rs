use super::Frame;
use crate::state::{FormKind, State};
use crate::store::ApiResponse;
use crate::ui::widgets::{centered_rect, spinner::spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the sign in, register or account form.
///
pub fn auth(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let area = centered_rect(60, 90, size);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.current_view().title())
        .border_style(styling::active_block_border_style(theme));

    let form = match state.auth_form() {
        Some(form) => form,
        None => {
            // Account view opened before the session check finished.
            let line = match state.auth() {
                ApiResponse::Rejected(error) => Line::from(Span::styled(
                    error
                        .as_ref()
                        .map(|error| error.message())
                        .unwrap_or_else(|| "Unable to check session".to_string()),
                    styling::error_text_style(theme),
                )),
                _ => Line::from(spinner(state.get_spinner_index(), "Checking session", theme)),
            };
            frame.render_widget(
                Paragraph::new(line).alignment(Alignment::Center).block(block),
                area,
            );
            return;
        }
    };

    let fields = form.kind().fields();
    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    frame.render_widget(block, area);
    for (index, field) in fields.iter().enumerate() {
        let focused = form.focused_field() == *field;
        let mut input = form.input(*field).clone();
        input.set_style(styling::normal_text_style(theme));
        input.set_cursor_line_style(ratatui::style::Style::default());
        if !focused {
            input.set_cursor_style(styling::normal_text_style(theme));
        }
        input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.label())
                .border_style(styling::block_border_style(theme, focused)),
        );
        frame.render_widget(input.widget(), chunks[index]);
    }

    let status = if form.submit_loading {
        Line::from(spinner(state.get_spinner_index(), "Submitting", theme))
    } else if form.confirm_delete {
        Line::from(Span::styled(
            "Press Ctrl+d again to delete your account and all of its lists",
            styling::error_text_style(theme).add_modifier(ratatui::style::Modifier::BOLD),
        ))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(error.clone(), styling::error_text_style(theme)))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(status), chunks[fields.len()]);

    let hint = match form.kind() {
        FormKind::SignIn => "No account yet? Ctrl+n to register",
        FormKind::Register => "Already registered? Ctrl+n to sign in",
        FormKind::Account => "Ctrl+o: sign out, Ctrl+d: delete account",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, styling::muted_text_style(theme)))),
        chunks[fields.len() + 1],
    );
}
