use crate::ui::theme::Theme;
use ratatui::{style::Style, text::Span};

/// Braille frames cycled once per tick.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return the spinner frame for `index` followed by `label`.
///
pub fn spinner(index: usize, label: &str, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!("{} {}", FRAMES[index % FRAMES.len()], label),
        Style::default().fg(theme.primary.to_color()),
    )
}
