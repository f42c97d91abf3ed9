use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the current toast in the top right corner of `size`.
///
pub fn notification(frame: &mut Frame, size: Rect, state: &State) {
    let notification = match state.notification() {
        Some(notification) => notification,
        None => return,
    };
    let theme = state.get_theme();
    let width = toast_width(notification.message.chars().count(), size.width);
    let area = Rect {
        x: size.x + size.width.saturating_sub(width),
        y: size.y,
        width,
        height: 3.min(size.height),
    };
    let style = styling::notification_style(theme, notification.kind);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(notification.message.clone(), style)))
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        area,
    );
}

/// Message length plus borders and padding, clamped to the available width.
///
fn toast_width(message_len: usize, available: u16) -> u16 {
    u16::try_from(message_len)
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(available)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_message_gets_padding() {
        assert_eq!(toast_width(10, 80), 14);
    }

    #[test]
    fn oversized_message_is_clamped() {
        assert_eq!(toast_width(usize::MAX, 80), 80);
        assert_eq!(toast_width(u16::MAX as usize, 80), 80);
    }
}
