use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub event_list: Rect,
    pub form: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: event list | form panel
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Min(36),    // Event list
            Constraint::Length(46), // Form panel
        ])
        .split(content);

    AppLayout {
        event_list: h_chunks[0],
        form: h_chunks[1],
        status_bar,
    }
}
