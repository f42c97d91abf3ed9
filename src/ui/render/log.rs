use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the most recent log entries that fit.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let visible = size.height.saturating_sub(2) as usize;
    let entries = state.log_entries();
    let items: Vec<ListItem> = entries[entries.len().saturating_sub(visible)..]
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry.clone(),
                styling::normal_text_style(theme),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Log (` to hide)")
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(list, size);
}
