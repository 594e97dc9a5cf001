use thiserror::Error;

use crate::models::schedule::ScheduleDocument;

pub const DEFAULT_SCHEDULE_URL: &str =
    "https://xjvq5wtiye.execute-api.us-east-1.amazonaws.com/interview/api/v1/challenge";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("schedule request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("schedule request returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed schedule body: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

pub async fn get_schedule(
    client: &reqwest::Client,
    url: &str,
) -> Result<ScheduleDocument, FetchError> {
    tracing::debug!(url, "Fetching maintenance schedule");
    let response = client.get(url).send().await?;

    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(FetchError::Status { status, body: text });
    }

    let document: ScheduleDocument =
        serde_json::from_str(&text).map_err(|source| FetchError::Parse { source, body: text })?;
    tracing::debug!(months = document.calendar.len(), "Schedule received");
    Ok(document)
}
