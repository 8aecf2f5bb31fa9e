use crate::error::{self, Error, Result};
use crate::export::Exportable;
use crate::record::{Record, RecordId};
use crate::table::{Column, Tabular};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// An outgoing webhook subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Record id.
    pub id: RecordId,
    /// Target URL.
    pub url: String,
    /// Subscribed event name, e.g. `user.created`.
    pub event: String,
    /// Whether deliveries are enabled.
    pub active: bool,
}

/// Partial update of a [`Webhook`].
#[derive(Debug, Clone, Default)]
pub struct WebhookPatch {
    /// New URL.
    pub url: Option<String>,
    /// New event.
    pub event: Option<String>,
    /// New enabled state.
    pub active: Option<bool>,
}

impl Webhook {
    /// Creates an active webhook without an id.
    pub fn new(url: &str, event: &str) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            url: url.to_string(),
            event: event.to_string(),
            active: true,
        }
    }
}

impl Record for Webhook {
    type Patch = WebhookPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.url.as_str(), self.event.as_str()]
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(if self.active { "active" } else { "inactive" }))
    }

    fn apply_patch(&mut self, patch: WebhookPatch) {
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(event) = patch.event {
            self.event = event;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
    }

    fn validate(&self) -> Result<()> {
        error::require("url", &self.url)?;
        error::require("event", &self.event)?;
        let url = self.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::invalid("url", "must start with http:// or https://"));
        }
        Ok(())
    }
}

impl Exportable for Webhook {
    const FIELDS: &'static [&'static str] = &["id", "url", "event", "active"];
}

impl Tabular for Webhook {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("URL"),
            Column::new("Event"),
            Column::new("Active").with_width(6),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.url.clone(),
            self.event.clone(),
            if self.active { "yes" } else { "no" }.to_string(),
        ]
    }
}
