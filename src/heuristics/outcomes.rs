use super::matched_keyword_count;

/// Attempt and confirmation signals for one call outcome
#[derive(Debug, Clone, Copy)]
pub struct OutcomeSignal {
    /// Distinct intent keywords present
    pub attempts: usize,
    /// Whether an explicit confirmation phrase appeared
    pub confirmed: bool,
}

/// Detect an outcome (meeting booked, sale closed) in a lowercased transcript
///
/// Intent keywords count as attempts; confirmation requires one of the
/// explicit phrases verbatim. The two are independent, so a confirmation
/// phrase can fire with zero attempt keywords present.
pub fn detect_outcome(
    lowered: &str,
    keywords: &[String],
    confirmations: &[String],
) -> OutcomeSignal {
    let attempts = matched_keyword_count(lowered, keywords);
    let confirmed = confirmations
        .iter()
        .any(|phrase| lowered.contains(phrase.to_lowercase().as_str()));

    OutcomeSignal { attempts, confirmed }
}
