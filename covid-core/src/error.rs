use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures on the fetch path. Parsing and aggregation never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed to fetch {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request for {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },
}
