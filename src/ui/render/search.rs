use super::Frame;
use crate::search::pagination::{next_page, page_buttons, previous_page, PageButton};
use crate::search::{SearchViewState, Tab};
use crate::state::{Focus, State};
use crate::store::ApiResponse;
use crate::ui::widgets::{spinner::spinner, styling};
use crate::utils::MediaItem;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};

/// Render the search input, category tabs, results and pagination.
///
pub fn search(frame: &mut Frame, size: Rect, state: &State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);
    let view = state.search_view();

    search_input(frame, chunks[0], state);
    tabs(frame, chunks[1], state, &view);
    results(frame, chunks[2], state, &view);
    pagination(frame, chunks[3], state, &view);
}

fn search_input(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let active = state.current_focus() == Focus::SearchInput;
    let mut input = state.search_input().clone();
    input.set_placeholder_text("Search movies, TV shows and people");
    input.set_style(styling::normal_text_style(theme));
    input.set_cursor_line_style(ratatui::style::Style::default());
    if !active {
        input.set_cursor_style(styling::normal_text_style(theme));
    }
    input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(if active { "Search (Enter)" } else { "Search (/)" })
            .border_style(styling::block_border_style(theme, active)),
    );
    frame.render_widget(input.widget(), size);
}

fn tabs(frame: &mut Frame, size: Rect, state: &State, view: &SearchViewState) {
    let theme = state.get_theme();
    let selected = Tab::ALL
        .iter()
        .position(|tab| *tab == view.tab)
        .unwrap_or_default();
    let tabs = Tabs::new(Tab::ALL.iter().map(Tab::label).collect::<Vec<_>>())
        .select(selected)
        .style(styling::muted_text_style(theme))
        .highlight_style(styling::heading_style(theme));
    frame.render_widget(tabs, size);
}

fn results(frame: &mut Frame, size: Rect, state: &State, view: &SearchViewState) {
    let theme = state.get_theme();
    let query = view.query.trim();
    let title = if query.is_empty() {
        "Trending this week".to_string()
    } else {
        match state.search_results().response() {
            ApiResponse::Resolved(payload) => {
                format!("Results for \"{}\" ({})", query, payload.total_results())
            }
            _ => format!("Results for \"{}\"", query),
        }
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::block_border_style(
            theme,
            state.current_focus() == Focus::Results,
        ));

    let message = match state.search_results().response() {
        ApiResponse::Pending => Some(Line::from(spinner(
            state.get_spinner_index(),
            "Loading results",
            theme,
        ))),
        ApiResponse::Rejected(error) => Some(Line::from(Span::styled(
            error
                .as_ref()
                .map(|error| error.message())
                .unwrap_or_else(|| "Unable to load results".to_string()),
            styling::error_text_style(theme),
        ))),
        ApiResponse::Resolved(_) if state.search_results().items().is_empty() => Some(Line::from(
            Span::styled("No results found", styling::muted_text_style(theme)),
        )),
        ApiResponse::Resolved(_) => None,
    };
    if let Some(message) = message {
        frame.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .block(block),
            size,
        );
        return;
    }

    let items: Vec<ListItem> = state
        .search_results()
        .items()
        .iter()
        .map(|item| media_row(item, state))
        .collect();
    let mut list_state = ListState::default();
    list_state.select(Some(state.results_index()));
    let list = List::new(items)
        .block(block)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::highlight_style(theme))
        .highlight_symbol("› ");
    frame.render_stateful_widget(list, size, &mut list_state);
}

/// Single row: title, media type and subtitle.
///
pub fn media_row<'a>(item: &MediaItem, state: &State) -> ListItem<'a> {
    let theme = state.get_theme();
    let mut spans = vec![
        Span::styled(
            item.title.clone(),
            styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", item.media_type.label()),
            styling::muted_text_style(theme),
        ),
    ];
    if let Some(subtitle) = &item.subtitle {
        spans.push(Span::styled(
            format!("  {}", subtitle),
            styling::muted_text_style(theme),
        ));
    }
    ListItem::new(Line::from(spans))
}

fn pagination(frame: &mut Frame, size: Rect, state: &State, view: &SearchViewState) {
    let total_pages = state.search_results().total_pages();
    if total_pages <= 1 || view.query.trim().is_empty() {
        return;
    }
    let theme = state.get_theme();
    let (previous_style, next_style) = page_hint_styles(
        styling::muted_text_style(theme),
        view.page,
        total_pages,
    );
    let mut spans = vec![Span::styled("« h  ", previous_style)];
    for button in page_buttons(view.page, total_pages) {
        spans.push(match button {
            PageButton::Page {
                number,
                current: true,
            } => Span::styled(format!("[{}]", number), styling::heading_style(theme)),
            PageButton::Page { number, .. } => {
                Span::styled(format!(" {} ", number), styling::normal_text_style(theme))
            }
            PageButton::Divider => Span::styled(" … ", styling::muted_text_style(theme)),
        });
    }
    spans.push(Span::styled("  l »", next_style));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        size,
    );
}

/// Styles for the previous and next hints. A hint with no page to move to
/// is dimmed.
///
fn page_hint_styles(base: Style, page: u32, total_pages: u32) -> (Style, Style) {
    let hint = |available: bool| {
        if available {
            base
        } else {
            base.add_modifier(Modifier::DIM)
        }
    };
    (
        hint(previous_page(page).is_some()),
        hint(next_page(page, total_pages).is_some()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_dims_previous_hint() {
        let (previous, next) = page_hint_styles(Style::default(), 1, 5);
        assert!(previous.add_modifier.contains(Modifier::DIM));
        assert!(!next.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn last_page_dims_next_hint() {
        let (previous, next) = page_hint_styles(Style::default(), 5, 5);
        assert!(!previous.add_modifier.contains(Modifier::DIM));
        assert!(next.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn middle_page_keeps_both_hints() {
        let (previous, next) = page_hint_styles(Style::default(), 3, 5);
        assert_eq!(previous, Style::default());
        assert_eq!(next, Style::default());
    }
}
