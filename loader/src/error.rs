use changelog_shared::InvalidTimestamp;
use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while loading the changelog.
///
/// Each variant maps to one observable failure of the single fetch;
/// none of them is retried and nothing partial is kept.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The backend could not be reached at all.
    #[error("changelog backend unreachable")]
    BackendUnreachable(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("changelog backend returned {status}")]
    BackendError { status: StatusCode },

    /// The response body was not a JSON array of changelog records.
    #[error("malformed changelog response")]
    MalformedResponse(#[source] reqwest::Error),

    /// A record carried a timestamp that does not parse. The whole
    /// load fails rather than silently substituting a sentinel.
    #[error("entry {entry_id}: bad {field}")]
    InvalidDate {
        entry_id: String,
        field: &'static str,
        #[source]
        source: InvalidTimestamp,
    },
}
