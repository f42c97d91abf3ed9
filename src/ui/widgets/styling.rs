use crate::state::NotificationKind;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

pub fn block_border_style(theme: &Theme, active: bool) -> Style {
    if active {
        active_block_border_style(theme)
    } else {
        normal_block_border_style(theme)
    }
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for highlighted list rows.
///
pub fn highlight_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

pub fn heading_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

pub fn error_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the style of a toast of `kind`.
///
pub fn notification_style(theme: &Theme, kind: NotificationKind) -> Style {
    let color = match kind {
        NotificationKind::Success => theme.success,
        NotificationKind::Info => theme.info,
        NotificationKind::Warn => theme.warning,
        NotificationKind::Error => theme.error,
    };
    Style::default()
        .fg(color.to_color())
        .add_modifier(Modifier::BOLD)
}
