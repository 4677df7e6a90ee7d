use thiserror::Error;

/// Failure fetching a record from the reference-data service.
///
/// No retry happens at this layer; a failed fetch fails the whole request and
/// is never memoized, so the next identical request hits the remote again.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The remote service has no record for the requested identifier.
    #[error("not found: {0}")]
    NotFound(String),

    /// The remote service was reachable but returned a failure status or a
    /// body that could not be decoded.
    #[error("upstream failure for {ident}: {reason}")]
    Upstream { ident: String, reason: String },
}

impl FetchError {
    pub(crate) fn upstream(ident: &str, reason: impl std::fmt::Display) -> Self {
        Self::Upstream {
            ident: ident.to_string(),
            reason: reason.to_string(),
        }
    }
}
