use crate::app::state::{AppState, FocusPanel, NotificationKind};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} events ", state.events.len()),
        Theme::status_bar(),
    ));

    if state.loading {
        parts.push(Span::styled(
            " Loading... ",
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }
    if state.form.submitting {
        parts.push(Span::styled(
            " Saving... ",
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    if let Some(ref notification) = state.notification {
        let style = match notification.kind {
            NotificationKind::Success => Theme::notify_success(),
            NotificationKind::Error => Theme::notify_error(),
        };
        parts.push(Span::styled(format!(" {} ", notification.text), style));
        parts.push(Span::styled(" Esc dismiss ", Theme::status_bar()));
    }

    // Focus indicator pinned to the right edge
    let focus_name = match state.focus {
        FocusPanel::EventList => "LIST",
        FocusPanel::Form => "FORM",
    };
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    frame.render_widget(Paragraph::new(line), area);
}
