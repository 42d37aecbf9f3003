use crate::api::{Event, EventDraft};
use crate::config::AppConfig;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    EventList,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Date,
    Description,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Date,
            FormField::Date => FormField::Description,
            FormField::Description => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Date => FormField::Title,
            FormField::Description => FormField::Date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient status message shown in the status bar until it expires
/// or the user dismisses it.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    pub raised_at: Instant,
}

/// Single-line text input with a byte-offset cursor.
#[derive(Debug, Default, Clone)]
pub struct FieldInput {
    pub text: String,
    pub cursor: usize,
}

impl FieldInput {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// The in-progress create/edit draft.
///
/// `editing` is the edit target: `None` means add mode, `Some(event)`
/// means the draft updates that event. The two states and their
/// transitions are handled in `app::handler`.
#[derive(Debug, Default)]
pub struct FormState {
    pub title: FieldInput,
    pub date: FieldInput,
    pub description: FieldInput,
    pub active_field: FormField,
    pub editing: Option<Event>,
    pub submitting: bool,
}

impl FormState {
    /// Switch to add mode with empty fields. Idempotent.
    pub fn begin_add(&mut self) {
        self.editing = None;
        self.title.clear();
        self.date.clear();
        self.description.clear();
        self.active_field = FormField::Title;
    }

    /// Target `event` and copy its fields into the draft verbatim.
    /// Re-targeting while already editing just overwrites the draft.
    pub fn begin_edit(&mut self, event: &Event) {
        self.title.set_text(&event.title);
        self.date.set_text(&event.date);
        self.description.set_text(&event.description);
        self.editing = Some(event.clone());
        self.active_field = FormField::Title;
    }

    pub fn cancel_edit(&mut self) {
        self.begin_add();
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.text.clone(),
            date: self.date.text.clone(),
            description: self.description.text.clone(),
        }
    }

    pub fn active_input_mut(&mut self) -> &mut FieldInput {
        match self.active_field {
            FormField::Title => &mut self.title,
            FormField::Date => &mut self.date,
            FormField::Description => &mut self.description,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    /// Snapshot of the server's collection, replaced wholesale on fetch.
    pub events: Vec<Event>,
    pub loading: bool,
    pub form: FormState,
    pub selected: usize,
    pub focus: FocusPanel,
    pub notification: Option<Notification>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            events: Vec::new(),
            // The first fetch is issued on startup
            loading: true,
            form: FormState::default(),
            selected: 0,
            focus: FocusPanel::EventList,
            notification: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.events.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.events.len() {
            self.selected += 1;
            self.dirty = true;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.dirty = true;
        }
    }

    /// Replace the list snapshot and keep the selection in bounds.
    pub fn replace_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.selected = self.selected.min(self.events.len().saturating_sub(1));
        self.loading = false;
        self.dirty = true;
    }

    pub fn notify_success(&mut self, text: impl Into<String>) {
        self.notification = Some(Notification {
            kind: NotificationKind::Success,
            text: text.into(),
            raised_at: Instant::now(),
        });
        self.dirty = true;
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notification = Some(Notification {
            kind: NotificationKind::Error,
            text: text.into(),
            raised_at: Instant::now(),
        });
        self.dirty = true;
    }

    pub fn dismiss_notification(&mut self) {
        if self.notification.take().is_some() {
            self.dirty = true;
        }
    }
}
