use thiserror::Error;

use crate::domain::record::TableParseError;

/// Transport or parse failure on the tool resource. Surfaced as a full-page
/// error with a retry affordance; never retried automatically.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to fetch the tools resource: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("the tools resource responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to parse the tools resource: {0}")]
    Parse(#[from] TableParseError),
}

/// A detail page was requested for a name that matches nothing in the catalog.
#[derive(Debug, Error)]
#[error("no tool named \"{name}\" is listed")]
pub struct ToolNotFoundError {
    pub name: String,
}

/// Any failure talking to the news API. Recovered by substituting the bundled
/// sample articles; never blocks rendering.
#[derive(Debug, Error)]
pub enum NewsLoadError {
    #[error("failed to reach the news API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("the news API responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("the news API returned an unexpected payload: {0}")]
    Payload(String),
}
