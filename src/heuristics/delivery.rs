use super::matched_keyword_count;

/// Baseline energy for a transcript with no signals either way
const ENERGY_BASELINE: u32 = 50;

/// Points added per exclamation mark and per distinct positive word
const ENERGY_STEP: u32 = 5;

/// Score call energy from punctuation and positive vocabulary
///
/// Starts at 50 and climbs five points per exclamation mark and per distinct
/// positive word, capped at 100. Never drops below the baseline.
pub fn energy_level(lowered: &str, positive_words: &[String]) -> u32 {
    let exclamations = lowered.matches('!').count() as u32;
    let positives = matched_keyword_count(lowered, positive_words) as u32;

    (ENERGY_BASELINE + ENERGY_STEP * exclamations + ENERGY_STEP * positives).min(100)
}

/// Count textual interruption markers
///
/// "--" marks a cut-off, "..." a trail-off. Both come straight from how the
/// transcription service renders interrupted speech.
pub fn count_interruptions(text: &str) -> usize {
    text.matches("--").count() + text.matches("...").count()
}

/// Estimate seconds of speech from word count at an assumed speaking rate
pub fn estimate_talk_time(word_count: usize, words_per_minute: u32) -> u64 {
    if words_per_minute == 0 {
        return 0;
    }
    (word_count as f64 / words_per_minute as f64 * 60.0).round() as u64
}
