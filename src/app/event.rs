use crate::api::Event;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Full event list fetched from the server
    EventsLoaded(Vec<Event>),
    FetchFailed {
        error: String,
    },

    /// Mutation outcomes, one pair per operation
    EventCreated,
    CreateFailed {
        error: String,
    },
    EventUpdated,
    UpdateFailed {
        error: String,
    },
    EventDeleted,
    DeleteFailed {
        error: String,
    },

    /// Tick for UI refresh and notification expiry
    Tick,
}
