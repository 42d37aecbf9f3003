mod event_list;
mod form;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    event_list::render(frame, app_layout.event_list, state);
    form::render(frame, app_layout.form, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
