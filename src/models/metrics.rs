use serde::{Deserialize, Serialize};

/// Deterministic metrics computed from transcript text alone
///
/// Every field is derived from keyword and punctuation heuristics, so the
/// same transcript always produces the same metrics regardless of what the
/// language model returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallMetrics {
    /// Estimated seconds of speech, from word count at the assumed rate
    pub talk_time: u64,
    /// Estimated seconds of listening (mirrors talk_time until audio timing exists)
    pub listen_time: u64,
    /// Count of textual interruption markers ("--" and "...")
    pub interruptions: usize,
    /// Distinct objection keywords present
    pub objections_raised: usize,
    /// Objections assumed handled (raised minus a fixed allowance of two)
    pub objections_resolved: usize,
    /// Whether an explicit meeting confirmation phrase appeared
    pub meeting_booked: bool,
    /// Whether an explicit closing confirmation phrase appeared
    pub sale_closed: bool,
    /// Energy score from exclamations and positive vocabulary (50-100)
    pub energy_level: u32,
    /// Placeholder confidence value until richer signals exist
    pub confidence_score: u32,
    /// Whitespace-separated word count of the transcript
    pub word_count: usize,
    /// Distinct scheduling-intent keywords present
    pub meeting_attempts: usize,
    /// Distinct deal-finalization keywords present
    pub closing_attempts: usize,
}
