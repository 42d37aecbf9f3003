use crate::app::state::{AppState, FieldInput, FocusPanel, FormField};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Form;
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let title = if state.form.is_editing() {
        " Edit Event "
    } else {
        " Add New Event "
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Date
            Constraint::Length(3), // Description
            Constraint::Length(1), // Busy marker
            Constraint::Min(0),    // Hints
        ])
        .split(inner);

    render_field(
        frame,
        chunks[0],
        "Title",
        &state.form.title,
        focused && state.form.active_field == FormField::Title,
    );
    render_field(
        frame,
        chunks[1],
        "Date",
        &state.form.date,
        focused && state.form.active_field == FormField::Date,
    );
    render_field(
        frame,
        chunks[2],
        "Description",
        &state.form.description,
        focused && state.form.active_field == FormField::Description,
    );

    if state.form.submitting {
        let busy = Paragraph::new(" Saving...").style(Theme::busy());
        frame.render_widget(busy, chunks[3]);
    }

    let mut hints = vec![Line::from(Span::styled(
        " Enter save · Tab next field",
        Theme::hint(),
    ))];
    if state.form.is_editing() {
        hints.push(Line::from(Span::styled(" Esc cancel edit", Theme::hint())));
    } else {
        hints.push(Line::from(Span::styled(" Esc back to list", Theme::hint())));
    }
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, input: &FieldInput, active: bool) {
    let (label_style, border_style) = if active {
        (Theme::field_label_focused(), Theme::border_focused())
    } else {
        (Theme::field_label(), Theme::border())
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .title_style(label_style)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(input.text.as_str()).style(Theme::input_text());
    frame.render_widget(paragraph, inner);

    if active {
        let cursor_x = inner.x + input.text[..input.cursor].width() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}
