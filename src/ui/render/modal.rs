use super::Frame;
use crate::state::State;
use crate::store::{ApiResponse, ModalTarget};
use crate::ui::widgets::{centered_rect, spinner::spinner, styling};
use crate::utils::text::truncate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

const TITLE_WIDTH: usize = 40;

/// Render the add to list or remove from list popup.
///
pub fn list_modal(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let target = match &state.list_modal().target {
        Some(target) => target,
        None => return,
    };
    let area = centered_rect(60, 60, size);
    let (title, prompt) = match target {
        ModalTarget::Add { item } => (
            "Add to list",
            format!("Add \"{}\" to:", truncate(&item.title, TITLE_WIDTH)),
        ),
        ModalTarget::Remove { list, item } => (
            "Remove from list",
            format!(
                "Remove \"{}\" from \"{}\"?",
                truncate(&item.title, TITLE_WIDTH),
                list.name
            ),
        ),
    };

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(styling::active_block_border_style(theme)),
        area,
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(prompt, styling::heading_style(theme)))),
        chunks[0],
    );

    if let ModalTarget::Add { .. } = target {
        if !state.is_authenticated() {
            frame.render_widget(
                Paragraph::new("Sign in to keep lists. Press Enter to sign in.")
                    .style(styling::muted_text_style(theme)),
                chunks[1],
            );
        } else {
            list_picker(frame, chunks[1], state);
        }
    }

    let form = state.modal_form();
    let status = if form.submit_loading {
        Line::from(spinner(state.get_spinner_index(), "Saving", theme))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(error.clone(), styling::error_text_style(theme)))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(status), chunks[2]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter: confirm, Esc: cancel",
            styling::muted_text_style(theme),
        ))),
        chunks[3],
    );
}

/// The viewer's lists to pick from, or a name input for a first list.
///
fn list_picker(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    match &state.lists().lists {
        ApiResponse::Pending => frame.render_widget(
            Paragraph::new(Line::from(spinner(
                state.get_spinner_index(),
                "Loading lists",
                theme,
            ))),
            size,
        ),
        ApiResponse::Rejected(_) => frame.render_widget(
            Paragraph::new("Unable to load lists").style(styling::error_text_style(theme)),
            size,
        ),
        ApiResponse::Resolved(lists) if lists.is_empty() => {
            let mut input = state.modal_form().new_list_name.clone();
            input.set_placeholder_text("Name your first list");
            input.set_cursor_line_style(ratatui::style::Style::default());
            input.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("New list")
                    .border_style(styling::active_block_border_style(theme)),
            );
            frame.render_widget(input.widget(), Rect { height: 3.min(size.height), ..size });
        }
        ApiResponse::Resolved(lists) => {
            let target = state.modal_form().target_list_id.as_deref();
            let items: Vec<ListItem> = lists
                .iter()
                .map(|list| ListItem::new(list.name.clone()))
                .collect();
            let mut list_state = ListState::default();
            list_state.select(target.and_then(|id| lists.iter().position(|list| list.id == id)));
            frame.render_stateful_widget(
                List::new(items)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Lists (j/k)")
                            .border_style(styling::normal_block_border_style(theme)),
                    )
                    .style(styling::normal_text_style(theme))
                    .highlight_style(styling::highlight_style(theme))
                    .highlight_symbol("› "),
                size,
                &mut list_state,
            );
        }
    }
}
