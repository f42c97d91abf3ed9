use super::Frame;
use crate::state::{Focus, ListsPanel, State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Key hints for whatever currently takes input.
///
fn hints(state: &State) -> &'static str {
    if state.list_modal().visible {
        return if state.modal_needs_new_list() {
            " Type a list name, Enter: create and add, Esc: cancel"
        } else {
            " j/k: choose list, Enter: confirm, Esc: cancel"
        };
    }
    match state.current_view() {
        View::Search if state.current_focus() == Focus::SearchInput => {
            " Type to search, Enter: search, Esc: results"
        }
        View::Search => {
            " j/k: results, Tab: category, h/l: page, Enter: open, a: add to list, /: search, q: quit"
        }
        View::Detail(_) => " j/k: credits, Enter: open credit, a: add to list, Esc: back, q: quit",
        View::Lists if state.list_form().is_some() => " Type a name, Enter: save, Esc: cancel",
        View::Lists if state.list_delete_confirmation().is_some() => " d: confirm delete, Esc: cancel",
        View::Lists => match state.lists_panel() {
            ListsPanel::Lists => {
                " j/k: lists, Tab: items, n: new, e: rename, d: delete, Esc: back, q: quit"
            }
            ListsPanel::Items => " j/k: items, Tab: lists, Enter: open, d: remove, Esc: back, q: quit",
        },
        View::SignIn | View::Register | View::Account => {
            " Tab: next field, Enter: submit, Esc: back"
        }
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let mut spans = vec![
        Span::styled(hints(state), styling::muted_text_style(theme)),
        Span::styled("  `: log", styling::muted_text_style(theme)),
    ];
    if state.notification().is_some() && !state.is_text_input_active() {
        spans.push(Span::styled("  x: dismiss", styling::muted_text_style(theme)));
    }
    let line = Line::from(spans);
    frame.render_widget(Paragraph::new(line), size);
}
