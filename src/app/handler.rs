use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Apply one event to the state and return the effects to run.
///
/// This is the whole state machine: terminal input drives the form and
/// selection, API completions update the snapshot and raise
/// notifications, and every successful mutation requests a full
/// re-fetch of the list.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::EventsLoaded(events) => {
            state.replace_events(events);
            vec![]
        }
        AppEvent::FetchFailed { error } => {
            // The previous snapshot stays on screen; the failure is
            // only surfaced as a notification.
            state.loading = false;
            state.dirty = true;
            state.notify_error(format!("Error loading events: {error}"));
            vec![]
        }
        AppEvent::EventCreated => {
            state.form.submitting = false;
            state.form.begin_add();
            state.focus = FocusPanel::EventList;
            state.notify_success("Event added");
            vec![request_fetch(state)]
        }
        AppEvent::CreateFailed { error } => {
            // Draft stays untouched so the user can retry.
            state.form.submitting = false;
            state.notify_error(format!("Error adding event: {error}"));
            vec![]
        }
        AppEvent::EventUpdated => {
            state.form.submitting = false;
            state.form.cancel_edit();
            state.focus = FocusPanel::EventList;
            state.notify_success("Event updated");
            vec![request_fetch(state)]
        }
        AppEvent::UpdateFailed { error } => {
            // Draft and edit target survive a failure; the user may
            // retry or cancel.
            state.form.submitting = false;
            state.notify_error(format!("Error updating event: {error}"));
            vec![]
        }
        AppEvent::EventDeleted => {
            state.notify_success("Event deleted");
            vec![request_fetch(state)]
        }
        AppEvent::DeleteFailed { error } => {
            state.notify_error(format!("Error deleting event: {error}"));
            vec![]
        }
        AppEvent::Tick => {
            expire_notification(state);
            vec![]
        }
    }
}

/// Mark the data store as loading and request a full re-fetch.
fn request_fetch(state: &mut AppState) -> Action {
    state.loading = true;
    state.dirty = true;
    Action::FetchEvents
}

fn expire_notification(state: &mut AppState) {
    let lifetime = Duration::from_secs(state.config.ui.notification_secs);
    if let Some(ref notification) = state.notification {
        if notification.raised_at.elapsed() >= lifetime {
            state.notification = None;
            state.dirty = true;
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.focus {
        FocusPanel::EventList => handle_list_key(state, key),
        FocusPanel::Form => handle_form_key(state, key),
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::Home => {
            state.selected = 0;
            vec![]
        }
        KeyCode::End => {
            state.selected = state.events.len().saturating_sub(1);
            vec![]
        }
        KeyCode::Char('a') | KeyCode::Char('n') => {
            state.form.begin_add();
            state.focus = FocusPanel::Form;
            vec![]
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(event) = state.selected_event().cloned() {
                state.form.begin_edit(&event);
                state.focus = FocusPanel::Form;
            }
            vec![]
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            // No confirmation; the re-fetch after the server accepts
            // makes the removal visible.
            match state.selected_event() {
                Some(event) => vec![Action::DeleteEvent {
                    id: event.id.clone(),
                }],
                None => vec![],
            }
        }
        KeyCode::Char('r') => vec![request_fetch(state)],
        KeyCode::Tab => {
            state.focus = FocusPanel::Form;
            vec![]
        }
        KeyCode::Esc => {
            state.dismiss_notification();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => {
            state.form.cancel_edit();
            state.focus = FocusPanel::EventList;
            vec![]
        }
        KeyCode::Enter => submit(state),
        KeyCode::Tab | KeyCode::Down => {
            state.form.active_field = state.form.active_field.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.form.active_field = state.form.active_field.prev();
            vec![]
        }
        KeyCode::Backspace => {
            state.form.active_input_mut().delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.form.active_input_mut().delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.form.active_input_mut().move_left();
            vec![]
        }
        KeyCode::Right => {
            state.form.active_input_mut().move_right();
            vec![]
        }
        KeyCode::Home => {
            state.form.active_input_mut().move_home();
            vec![]
        }
        KeyCode::End => {
            state.form.active_input_mut().move_end();
            vec![]
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => state.form.active_input_mut().move_home(),
                    'e' => state.form.active_input_mut().move_end(),
                    'u' => state.form.active_input_mut().clear(),
                    _ => {}
                }
            } else {
                state.form.active_input_mut().insert_char(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

/// Submit the draft: update when an edit target is set, create
/// otherwise. Ignored outright while a submission is already in
/// flight.
fn submit(state: &mut AppState) -> Vec<Action> {
    if state.form.submitting {
        return vec![];
    }
    state.form.submitting = true;
    state.dirty = true;
    let draft = state.form.draft();
    match state.form.editing {
        Some(ref event) => vec![Action::UpdateEvent {
            id: event.id.clone(),
            draft,
        }],
        None => vec![Action::CreateEvent { draft }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Event, EventDraft};
    use crate::config::AppConfig;
    use std::time::Instant;

    fn new_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.loading = false;
        state
    }

    fn sample_event(id: &str, title: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            date: "2024-01-01".to_string(),
            description: String::new(),
        }
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_events_loaded_replaces_snapshot_in_order() {
        let mut state = new_state();
        state.loading = true;
        let events = vec![sample_event("2", "B"), sample_event("1", "A")];
        let actions = handle_event(&mut state, AppEvent::EventsLoaded(events.clone()));
        assert!(actions.is_empty());
        assert_eq!(state.events, events);
        assert!(!state.loading);
    }

    #[test]
    fn test_events_loaded_clamps_selection() {
        let mut state = new_state();
        state.events = vec![sample_event("1", "A"), sample_event("2", "B")];
        state.selected = 1;
        handle_event(&mut state, AppEvent::EventsLoaded(vec![sample_event("1", "A")]));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_fetch_failure_keeps_stale_list_and_notifies() {
        let mut state = new_state();
        state.events = vec![sample_event("1", "A")];
        state.loading = true;
        let actions = handle_event(
            &mut state,
            AppEvent::FetchFailed {
                error: "boom".into(),
            },
        );
        assert!(actions.is_empty());
        assert_eq!(state.events.len(), 1);
        assert!(!state.loading);
        let notification = state.notification.expect("fetch failure should notify");
        assert_eq!(notification.kind, NotificationKind::Error);
    }

    #[test]
    fn test_edit_gesture_copies_fields_verbatim() {
        let mut state = new_state();
        let mut event = sample_event("7", "Standup");
        event.description = "daily".to_string();
        state.events = vec![event.clone()];

        press(&mut state, KeyCode::Char('e'));

        assert_eq!(state.focus, FocusPanel::Form);
        assert_eq!(state.form.editing.as_ref(), Some(&event));
        assert_eq!(state.form.title.text, "Standup");
        assert_eq!(state.form.date.text, "2024-01-01");
        assert_eq!(state.form.description.text, "daily");
    }

    #[test]
    fn test_edit_then_submit_without_changes_targets_event() {
        let mut state = new_state();
        let event = sample_event("7", "Standup");
        state.events = vec![event.clone()];

        press(&mut state, KeyCode::Char('e'));
        let actions = press(&mut state, KeyCode::Enter);

        assert_eq!(
            actions,
            vec![Action::UpdateEvent {
                id: "7".into(),
                draft: EventDraft {
                    title: event.title,
                    date: event.date,
                    description: event.description,
                },
            }]
        );
        assert!(state.form.submitting);
    }

    #[test]
    fn test_cancel_always_returns_to_empty_add_mode() {
        let mut state = new_state();
        state.events = vec![sample_event("1", "A")];

        press(&mut state, KeyCode::Char('e'));
        type_text(&mut state, "junk");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "more junk");
        press(&mut state, KeyCode::Esc);

        assert!(state.form.editing.is_none());
        assert_eq!(state.form.title.text, "");
        assert_eq!(state.form.date.text, "");
        assert_eq!(state.form.description.text, "");
        assert_eq!(state.focus, FocusPanel::EventList);
    }

    #[test]
    fn test_failed_create_keeps_draft_and_skips_refetch() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('a'));
        type_text(&mut state, "Party");
        let submit_actions = press(&mut state, KeyCode::Enter);
        assert!(matches!(submit_actions[0], Action::CreateEvent { .. }));

        let actions = handle_event(
            &mut state,
            AppEvent::CreateFailed {
                error: "500".into(),
            },
        );

        assert!(actions.is_empty());
        assert_eq!(state.form.title.text, "Party");
        assert!(!state.form.submitting);
        assert_eq!(
            state.notification.as_ref().map(|n| n.kind),
            Some(NotificationKind::Error)
        );
    }

    #[test]
    fn test_successful_create_clears_draft_and_refetches() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('a'));
        type_text(&mut state, "Party");
        press(&mut state, KeyCode::Enter);

        let actions = handle_event(&mut state, AppEvent::EventCreated);

        assert_eq!(actions, vec![Action::FetchEvents]);
        assert_eq!(state.form.title.text, "");
        assert!(!state.form.submitting);
        assert!(state.loading);
        assert_eq!(
            state.notification.as_ref().map(|n| n.kind),
            Some(NotificationKind::Success)
        );
    }

    #[test]
    fn test_delete_gesture_and_single_refetch() {
        let mut state = new_state();
        state.events = vec![sample_event("9", "Gone")];

        let actions = press(&mut state, KeyCode::Char('d'));
        assert_eq!(actions, vec![Action::DeleteEvent { id: "9".into() }]);

        let actions = handle_event(&mut state, AppEvent::EventDeleted);
        assert_eq!(actions, vec![Action::FetchEvents]);
    }

    #[test]
    fn test_failed_update_keeps_edit_target() {
        let mut state = new_state();
        state.events = vec![sample_event("3", "C")];
        press(&mut state, KeyCode::Char('e'));
        press(&mut state, KeyCode::Enter);

        let actions = handle_event(
            &mut state,
            AppEvent::UpdateFailed {
                error: "409".into(),
            },
        );

        assert!(actions.is_empty());
        assert!(state.form.editing.is_some());
        assert_eq!(state.form.title.text, "C");
        assert!(!state.form.submitting);
    }

    #[test]
    fn test_submit_ignored_while_in_flight() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('a'));
        type_text(&mut state, "X");
        let first = press(&mut state, KeyCode::Enter);
        let second = press(&mut state, KeyCode::Enter);
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn test_retargeting_edit_overwrites_draft() {
        let mut state = new_state();
        let second = sample_event("2", "Second");
        state.events = vec![sample_event("1", "First"), second.clone()];

        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.form.title.text, "First");

        // Back to the list, move down, edit the other event without
        // cancelling first.
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char('e'));

        assert_eq!(state.form.editing.as_ref(), Some(&second));
        assert_eq!(state.form.title.text, "Second");
    }

    #[test]
    fn test_retargeting_without_cancel_overwrites_draft() {
        let mut state = new_state();
        let first = sample_event("1", "First");
        let second = sample_event("2", "Second");
        state.form.begin_edit(&first);
        state.form.begin_edit(&second);
        assert_eq!(state.form.editing.as_ref(), Some(&second));
        assert_eq!(state.form.title.text, "Second");
    }

    #[test]
    fn test_update_scenario_end_to_end() {
        // List is [{id:1,title:"A",date:"2024-01-01",description:""}];
        // edit it, change the title to "B", submit, server says ok.
        let mut state = new_state();
        state.events = vec![sample_event("1", "A")];

        press(&mut state, KeyCode::Char('e'));
        press(&mut state, KeyCode::Backspace);
        type_text(&mut state, "B");
        let actions = press(&mut state, KeyCode::Enter);

        assert_eq!(
            actions,
            vec![Action::UpdateEvent {
                id: "1".into(),
                draft: EventDraft {
                    title: "B".into(),
                    date: "2024-01-01".into(),
                    description: String::new(),
                },
            }]
        );

        let actions = handle_event(&mut state, AppEvent::EventUpdated);
        assert_eq!(actions, vec![Action::FetchEvents]);
        assert!(state.form.editing.is_none());
        assert_eq!(state.form.title.text, "");
        assert!(state.loading);
    }

    #[test]
    fn test_begin_add_is_idempotent() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('a'));
        type_text(&mut state, "draft");
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('n'));
        assert!(state.form.editing.is_none());
        assert_eq!(state.form.title.text, "");
    }

    #[test]
    fn test_notification_expires_on_tick() {
        let mut state = new_state();
        state.notify_success("done");
        let lifetime = Duration::from_secs(state.config.ui.notification_secs);
        state.notification.as_mut().unwrap().raised_at = Instant::now() - lifetime;
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_ctrl_c_quits_from_any_focus() {
        let mut state = new_state();
        let quit = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(quit, vec![Action::Quit]);

        state.focus = FocusPanel::Form;
        let quit = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(quit, vec![Action::Quit]);
    }

    #[test]
    fn test_field_editing_is_utf8_safe() {
        let mut input = FieldInput::default();
        for c in "café".chars() {
            input.insert_char(c);
        }
        input.delete_back();
        assert_eq!(input.text, "caf");
        input.move_left();
        input.insert_char('é');
        assert_eq!(input.text, "caéf");
    }
}
