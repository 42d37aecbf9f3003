use crate::api::{Event, EventDraft};
use anyhow::{Context, Result};

/// Thin JSON client for the `/api/events` collection.
///
/// Success is any 2xx status; everything else, including transport
/// failures, surfaces as a plain error. Response bodies of mutating
/// calls are ignored beyond their status.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/events", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/api/events/{}", self.base_url, id)
    }

    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let events = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .context("event list request failed")?
            .error_for_status()
            .context("server rejected event list request")?
            .json::<Vec<Event>>()
            .await
            .context("malformed event list response")?;
        Ok(events)
    }

    pub async fn create_event(&self, draft: &EventDraft) -> Result<()> {
        self.http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .context("create request failed")?
            .error_for_status()
            .context("server rejected create")?;
        Ok(())
    }

    pub async fn update_event(&self, id: &str, draft: &EventDraft) -> Result<()> {
        self.http
            .put(self.item_url(id))
            .json(draft)
            .send()
            .await
            .context("update request failed")?
            .error_for_status()
            .context("server rejected update")?;
        Ok(())
    }

    pub async fn delete_event(&self, id: &str) -> Result<()> {
        self.http
            .delete(self.item_url(id))
            .send()
            .await
            .context("delete request failed")?
            .error_for_status()
            .context("server rejected delete")?;
        Ok(())
    }
}
