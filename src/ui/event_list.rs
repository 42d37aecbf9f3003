use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::EventList;
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .title(" Events ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    if state.loading && state.events.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let paragraph = Paragraph::new("Loading events...").style(Theme::placeholder());
        frame.render_widget(paragraph, inner);
        return;
    }

    if state.events.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let paragraph =
            Paragraph::new("No events yet. Press 'a' to add one.").style(Theme::placeholder());
        frame.render_widget(paragraph, inner);
        return;
    }

    let items: Vec<ListItem> = state
        .events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let selected = focused && i == state.selected;
            let title_style = if selected {
                Theme::selected_row()
            } else {
                Theme::event_title()
            };

            let marker = if i == state.selected { "› " } else { "  " };
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(marker, Theme::selected_row()),
                    Span::styled(event.title.clone(), title_style),
                ]),
                Line::from(Span::styled(
                    format!("  {}", event.date),
                    Theme::event_date(),
                )),
            ];
            if !event.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", event.description),
                    Theme::event_description(),
                )));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block);
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
