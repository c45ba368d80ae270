use thiserror::Error;

/// Failures the analysis pipeline surfaces to its caller
///
/// A parse that fell back to the neutral report is not an error; the request
/// still succeeds with the fallback in place.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Required call identifier absent from the request
    #[error("call_id is required")]
    MissingCallId,

    /// No transcript was supplied and none could be fetched
    #[error("No transcript available for analysis")]
    NoTranscript,

    /// The completion call failed (transport, status, or empty content)
    #[error("Analysis provider failed: {0}")]
    Provider(#[from] anyhow::Error),
}

impl AnalysisError {
    /// HTTP status this error maps to at the entry point
    pub fn status_code(&self) -> u16 {
        match self {
            AnalysisError::MissingCallId => 400,
            AnalysisError::NoTranscript | AnalysisError::Provider(_) => 500,
        }
    }

    /// Error body shape for the entry point response
    pub fn error_body(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.to_string() })
    }
}
