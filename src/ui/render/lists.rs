use super::Frame;
use crate::api::List as UserList;
use crate::state::{ListFormMode, ListsPanel, State};
use crate::store::ApiResponse;
use crate::ui::widgets::{centered_rect, spinner::spinner, styling};
use crate::utils::MediaItem;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

/// Render the viewer's lists beside the items of the highlighted list.
///
pub fn lists(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("My Lists")
        .border_style(styling::block_border_style(
            theme,
            state.lists_panel() == ListsPanel::Lists,
        ));

    let lists = match &state.lists().lists {
        ApiResponse::Resolved(lists) => lists,
        response => {
            let line = match response {
                ApiResponse::Rejected(error) => Line::from(Span::styled(
                    error
                        .as_ref()
                        .map(|error| error.message())
                        .unwrap_or_else(|| "Unable to load lists".to_string()),
                    styling::error_text_style(theme),
                )),
                _ => Line::from(spinner(state.get_spinner_index(), "Loading lists", theme)),
            };
            frame.render_widget(
                Paragraph::new(line).alignment(Alignment::Center).block(block),
                size,
            );
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(size);

    if lists.is_empty() {
        frame.render_widget(
            Paragraph::new("You have no lists yet. Press n to create one.")
                .style(styling::muted_text_style(theme))
                .block(block),
            chunks[0],
        );
    } else {
        let items: Vec<ListItem> = lists.iter().map(|list| list_row(list, state)).collect();
        let mut list_state = ListState::default();
        list_state.select(Some(state.lists_index()));
        frame.render_stateful_widget(
            List::new(items)
                .block(block)
                .style(styling::normal_text_style(theme))
                .highlight_style(styling::highlight_style(theme))
                .highlight_symbol("› "),
            chunks[0],
            &mut list_state,
        );
    }
    list_items(frame, chunks[1], state);

    if state.list_form().is_some() {
        list_form(frame, size, state);
    } else if state.list_delete_confirmation().is_some() {
        delete_confirmation(frame, size, state);
    } else if let Some(error) = state.lists_error() {
        let area = Rect {
            y: size.y + size.height.saturating_sub(1),
            height: 1.min(size.height),
            ..size
        };
        frame.render_widget(
            Paragraph::new(error.to_string()).style(styling::error_text_style(state.get_theme())),
            area,
        );
    }
}

fn list_row<'a>(list: &UserList, state: &State) -> ListItem<'a> {
    let theme = state.get_theme();
    let mut spans = vec![Span::raw(list.name.clone())];
    spans.push(Span::styled(
        format!("  {}", list.items().len()),
        styling::muted_text_style(theme),
    ));
    if state.lists().selected_id.as_deref() == Some(list.id.as_str()) {
        spans.push(Span::styled("  ●", styling::heading_style(theme)));
    }
    ListItem::new(Line::from(spans))
}

fn list_items(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let title = state
        .highlighted_list()
        .map(|list| list.name.clone())
        .unwrap_or_else(|| "Items".to_string());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::block_border_style(
            theme,
            state.lists_panel() == ListsPanel::Items,
        ));

    let items = state
        .highlighted_list()
        .map(|list| list.items())
        .unwrap_or_default();
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing here yet. Press a on a search result to add it.")
                .style(styling::muted_text_style(theme))
                .block(block),
            size,
        );
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| super::search::media_row(&MediaItem::from(item), state))
        .collect();
    let mut list_state = ListState::default();
    if state.lists_panel() == ListsPanel::Items {
        list_state.select(Some(state.items_index()));
    }
    frame.render_stateful_widget(
        List::new(rows)
            .block(block)
            .highlight_style(styling::highlight_style(theme))
            .highlight_symbol("› "),
        size,
        &mut list_state,
    );
}

fn list_form(frame: &mut Frame, size: Rect, state: &State) {
    let form = match state.list_form() {
        Some(form) => form,
        None => return,
    };
    let theme = state.get_theme();
    let area = centered_rect(50, 40, size);
    let title = match form.mode {
        ListFormMode::Create => "New list",
        ListFormMode::Rename { .. } => "Rename list",
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(styling::active_block_border_style(theme)),
        area,
    );

    let mut input = form.name.clone();
    input.set_placeholder_text("List name");
    input.set_cursor_line_style(ratatui::style::Style::default());
    input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title("Name")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(input.widget(), chunks[0]);

    let status = if form.submit_loading {
        Line::from(spinner(state.get_spinner_index(), "Saving", theme))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(error.clone(), styling::error_text_style(theme)))
    } else {
        Line::from(Span::styled(
            "Enter: save, Esc: cancel",
            styling::muted_text_style(theme),
        ))
    };
    frame.render_widget(Paragraph::new(status), chunks[1]);
}

fn delete_confirmation(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let name = state
        .highlighted_list()
        .map(|list| list.name.clone())
        .unwrap_or_default();
    let area = centered_rect(50, 30, size);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete list \"{}\"?", name),
            styling::heading_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "d: confirm, Esc: cancel",
            styling::muted_text_style(theme),
        )),
    ];
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm")
                .border_style(Style::default().fg(theme.warning.to_color())),
        ),
        area,
    );
}
