pub mod delivery;
pub mod objections;
pub mod outcomes;

pub use delivery::*;
pub use objections::*;
pub use outcomes::*;

use crate::models::CallMetrics;

/// Fixed confidence value until richer signals exist to derive one
const CONFIDENCE_SCORE: u32 = 75;

/// Configuration for all metric extractors
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Words signalling a prospect objection
    pub objection_keywords: Vec<String>,
    /// Words signalling scheduling intent
    pub meeting_keywords: Vec<String>,
    /// Phrases confirming a meeting was booked
    pub meeting_confirmations: Vec<String>,
    /// Words signalling deal-finalization intent
    pub closing_keywords: Vec<String>,
    /// Phrases confirming the sale closed
    pub closing_confirmations: Vec<String>,
    /// Words contributing to the energy score
    pub positive_words: Vec<String>,
    /// Assumed speaking rate for talk-time estimation
    pub words_per_minute: u32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            objection_keywords: vec![
                "concern".to_string(),
                "worried".to_string(),
                "issue".to_string(),
                "problem".to_string(),
                "but".to_string(),
                "however".to_string(),
                "expensive".to_string(),
                "cost".to_string(),
                "price".to_string(),
                "budget".to_string(),
                "can't afford".to_string(),
            ],
            meeting_keywords: vec![
                "meeting".to_string(),
                "schedule".to_string(),
                "demo".to_string(),
                "call".to_string(),
                "time".to_string(),
                "date".to_string(),
                "calendar".to_string(),
                "available".to_string(),
                "when".to_string(),
                "next week".to_string(),
            ],
            meeting_confirmations: vec![
                "yes, let's schedule".to_string(),
                "sounds good".to_string(),
                "i'm available".to_string(),
                "tuesday works".to_string(),
                "next week works".to_string(),
            ],
            closing_keywords: vec![
                "purchase".to_string(),
                "buy".to_string(),
                "move forward".to_string(),
                "ready".to_string(),
                "commit".to_string(),
                "sign".to_string(),
                "deal".to_string(),
                "agreement".to_string(),
                "proceed".to_string(),
            ],
            closing_confirmations: vec![
                "yes, let's do it".to_string(),
                "i'm ready".to_string(),
                "let's move forward".to_string(),
                "sounds good".to_string(),
                "i'm in".to_string(),
            ],
            positive_words: vec![
                "great".to_string(),
                "excellent".to_string(),
                "perfect".to_string(),
                "amazing".to_string(),
                "wonderful".to_string(),
            ],
            words_per_minute: 150,
        }
    }
}

/// Count keywords present in a lowercased haystack, each at most once
fn matched_keyword_count(lowered: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|kw| lowered.contains(kw.to_lowercase().as_str()))
        .count()
}

/// Compute all deterministic metrics for a transcript
///
/// Matching is case-insensitive substring containment throughout, so short
/// keywords can fire inside unrelated words and "sounds good" confirms both
/// a meeting and a sale. Downstream scoring is calibrated against exactly
/// this behavior, so the matching rules must not tighten silently.
///
/// Always returns a fully populated record; an empty transcript yields zero
/// counts, baseline energy and the fixed confidence value.
pub fn extract_call_metrics(transcript: &str, config: &MetricsConfig) -> CallMetrics {
    let lowered = transcript.to_lowercase();
    let word_count = transcript.split_whitespace().count();

    // Objection signals
    let objections = count_objections(&lowered, &config.objection_keywords);

    // Outcome signals; meeting and sale share the same detection rule
    let meeting = detect_outcome(&lowered, &config.meeting_keywords, &config.meeting_confirmations);
    let closing = detect_outcome(&lowered, &config.closing_keywords, &config.closing_confirmations);

    // Delivery signals
    let talk_time = estimate_talk_time(word_count, config.words_per_minute);
    let energy = energy_level(&lowered, &config.positive_words);
    let interruptions = count_interruptions(&lowered);

    CallMetrics {
        talk_time,
        // No audio timing yet, so listening mirrors talking
        listen_time: talk_time,
        interruptions,
        objections_raised: objections.raised,
        objections_resolved: objections.resolved,
        meeting_booked: meeting.confirmed,
        sale_closed: closing.confirmed,
        energy_level: energy,
        confidence_score: CONFIDENCE_SCORE,
        word_count,
        meeting_attempts: meeting.attempts,
        closing_attempts: closing.attempts,
    }
}
