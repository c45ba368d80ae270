use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Narrative assessment of a call, as requested from the language model
///
/// This is the shape the prompt asks for. Model output that decodes as a
/// JSON object is passed through without being forced into this struct, so
/// the typed form matters mostly for the fallback report and for consumers
/// that want a schema to code against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Overall performance score (0-100)
    pub overall_score: u32,
    /// What the rep did well
    pub strengths: Vec<String>,
    /// What the rep should work on
    pub areas_for_improvement: Vec<String>,
    pub objection_handling: ObjectionHandling,
    pub meeting_booking: OutcomeAssessment,
    pub closing: OutcomeAssessment,
    pub communication: CommunicationQuality,
    /// Notable moments in chronological order
    pub key_moments: Vec<KeyMoment>,
}

/// Assessment of how objections were handled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectionHandling {
    /// Skill score (0-100)
    pub score: u32,
    pub objections_handled: u32,
    pub objections_missed: u32,
    pub recommendations: Vec<String>,
}

/// Assessment of a binary call outcome (meeting booked, sale closed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeAssessment {
    /// Whether the rep tried for the outcome at all
    pub attempted: bool,
    /// Whether the outcome was achieved
    pub successful: bool,
    /// How many tries the model counted
    pub attempts: u32,
    pub recommendations: Vec<String>,
}

/// Assessment of delivery and conversational balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunicationQuality {
    pub talk_to_listen_ratio: f64,
    /// Energy score (0-100)
    pub energy_level: u32,
    /// Clarity score (0-100)
    pub clarity_score: u32,
    pub recommendations: Vec<String>,
}

/// A single notable moment the model called out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyMoment {
    /// Position in the call, as the model describes it
    #[serde(default)]
    pub timestamp: String,
    /// Moment category (objection, buying signal, missed opportunity, ...)
    #[serde(rename = "type", default)]
    pub moment_type: String,
    #[serde(default)]
    pub description: String,
}

impl AnalysisReport {
    /// Neutral report substituted when the model response cannot be decoded
    ///
    /// Values are deliberately middling so a failed parse never reads as an
    /// outstanding or catastrophic call.
    pub fn fallback() -> Self {
        AnalysisReport {
            overall_score: 75,
            strengths: vec!["Good engagement".to_string()],
            areas_for_improvement: vec!["Could improve objection handling".to_string()],
            objection_handling: ObjectionHandling {
                score: 70,
                objections_handled: 0,
                objections_missed: 0,
                recommendations: Vec::new(),
            },
            meeting_booking: OutcomeAssessment {
                attempted: false,
                successful: false,
                attempts: 0,
                recommendations: Vec::new(),
            },
            closing: OutcomeAssessment {
                attempted: false,
                successful: false,
                attempts: 0,
                recommendations: Vec::new(),
            },
            communication: CommunicationQuality {
                talk_to_listen_ratio: 1.0,
                energy_level: 75,
                clarity_score: 75,
                recommendations: Vec::new(),
            },
            key_moments: Vec::new(),
        }
    }
}

/// Outcome of decoding the model's response text
///
/// Decoded output is kept as raw JSON rather than forced through
/// [`AnalysisReport`], so extra fields the model volunteers survive into the
/// final result. Both variants serialize as a plain object.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ParsedAnalysis {
    /// JSON object from the model, passed through without schema validation
    Decoded(Value),
    /// Fixed neutral report used when the response was not a JSON object
    Fallback(AnalysisReport),
}

impl ParsedAnalysis {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedAnalysis::Fallback(_))
    }
}
