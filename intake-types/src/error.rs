/// Error type for persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The service answered with a non-success status.
    #[error("{collection}: service responded with status {status}: {body}")]
    Status {
        collection: String,
        status: u16,
        body: String,
    },

    /// A row could not be turned into JSON.
    #[error("Could not encode row: {0}")]
    Encode(#[source] serde_json::Error),

    /// A returned row did not match the expected shape.
    #[error(
        "{collection}: could not decode row {}: {source}",
        id.as_deref().unwrap_or("without id")
    )]
    Decode {
        collection: String,
        id: Option<String>,
        #[source]
        source: serde_json::Error,
    },

    /// Transport-level failure (connection refused, TLS, injected test failure, ...).
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

/// Error type for survey submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// A submission for this session is already in flight.
    #[error("A submission is already in progress")]
    InFlight,

    /// The store rejected or failed the insert.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmitError {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }
}
