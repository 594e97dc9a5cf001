use async_trait::async_trait;

use crate::clients::schedule_client::{self, FetchError};
use crate::models::schedule::ScheduleDocument;

#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn fetch_schedule(&self) -> Result<ScheduleDocument, FetchError>;
}

pub struct HttpScheduleSource {
    client: reqwest::Client,
    url: String,
}

impl HttpScheduleSource {
    pub fn new(url: String) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ScheduleSource for HttpScheduleSource {
    async fn fetch_schedule(&self) -> Result<ScheduleDocument, FetchError> {
        schedule_client::get_schedule(&self.client, &self.url).await
    }
}

/// State of one visit to the calendar screen.
///
/// Starts out loading. `mount` performs the single fetch; afterwards the
/// screen either holds a document or nothing at all.
#[derive(Debug, Clone)]
pub struct CalendarScreen {
    loading: bool,
    mounted: bool,
    document: Option<ScheduleDocument>,
}

impl Default for CalendarScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarScreen {
    pub fn new() -> Self {
        Self {
            loading: true,
            mounted: false,
            document: None,
        }
    }

    pub async fn mount<S: ScheduleSource + ?Sized>(&mut self, source: &S) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        match source.fetch_schedule().await {
            Ok(document) => {
                self.document = Some(document);
            }
            Err(e) => {
                tracing::error!("Failed to load maintenance schedule: {}", e);
            }
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn document(&self) -> Option<&ScheduleDocument> {
        self.document.as_ref()
    }
}
