use crate::api::client::ApiClient;
use crate::api::EventDraft;
use crate::app::event::AppEvent;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Runs API operations off the event loop.
///
/// Each request is spawned as its own task and reports its outcome on
/// the shared `AppEvent` channel. Requests are never cancelled or
/// ordered relative to each other; racing operations resolve through
/// the full re-fetch that follows every successful mutation.
pub struct ApiManager {
    client: Arc<ApiClient>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl ApiManager {
    pub fn new(client: ApiClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            client: Arc::new(client),
            event_tx,
        }
    }

    pub fn fetch_events(&self) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            debug!("fetching event list");
            let event = match client.list_events().await {
                Ok(events) => {
                    debug!(count = events.len(), "event list loaded");
                    AppEvent::EventsLoaded(events)
                }
                Err(e) => {
                    warn!("fetch failed: {e:#}");
                    AppEvent::FetchFailed {
                        error: e.to_string(),
                    }
                }
            };
            let _ = tx.send(event);
        });
    }

    pub fn create_event(&self, draft: EventDraft) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match client.create_event(&draft).await {
                Ok(()) => AppEvent::EventCreated,
                Err(e) => {
                    warn!("create failed: {e:#}");
                    AppEvent::CreateFailed {
                        error: e.to_string(),
                    }
                }
            };
            let _ = tx.send(event);
        });
    }

    pub fn update_event(&self, id: String, draft: EventDraft) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match client.update_event(&id, &draft).await {
                Ok(()) => AppEvent::EventUpdated,
                Err(e) => {
                    warn!(id = %id, "update failed: {e:#}");
                    AppEvent::UpdateFailed {
                        error: e.to_string(),
                    }
                }
            };
            let _ = tx.send(event);
        });
    }

    pub fn delete_event(&self, id: String) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match client.delete_event(&id).await {
                Ok(()) => AppEvent::EventDeleted,
                Err(e) => {
                    warn!(id = %id, "delete failed: {e:#}");
                    AppEvent::DeleteFailed {
                        error: e.to_string(),
                    }
                }
            };
            let _ = tx.send(event);
        });
    }
}
