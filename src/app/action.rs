use crate::api::EventDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchEvents,
    CreateEvent { draft: EventDraft },
    UpdateEvent { id: String, draft: EventDraft },
    DeleteEvent { id: String },
    Quit,
}
