//! Pipeline error taxonomy.

/// Errors the analysis pipeline and counts store can produce.
/// Fetch failures are the only externally triggered kind; everything between
/// fetch and bucketize is total over well-formed input.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    /// URL unreachable, malformed, or non-success response. Recovered at the
    /// orchestrator boundary and shown to the user as a bad-URL condition.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Bucketizer called with no ranked words; the orchestrator short-circuits
    /// the empty case before this can happen, so hitting it is a defect.
    #[error("cannot build a word cloud from an empty ranking")]
    EmptyRanking,

    /// Counts store could not be read or written.
    #[error("counts store: {0}")]
    Store(#[from] std::io::Error),
}

impl CloudError {
    pub fn fetch(url: &str, reason: impl std::fmt::Display) -> Self {
        CloudError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
