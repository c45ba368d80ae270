use super::matched_keyword_count;

/// Objection counts for one transcript
#[derive(Debug, Clone, Copy)]
pub struct ObjectionCounts {
    /// Distinct objection keywords present
    pub raised: usize,
    /// Objections assumed handled
    pub resolved: usize,
}

/// Count objection signals in a lowercased transcript
///
/// Each distinct keyword counts once no matter how often it repeats.
/// Resolution is an estimate: raised minus a fixed allowance of two, floored
/// at zero. The text alone cannot show whether a rebuttal actually landed.
pub fn count_objections(lowered: &str, keywords: &[String]) -> ObjectionCounts {
    let raised = matched_keyword_count(lowered, keywords);
    let resolved = raised.saturating_sub(2);

    ObjectionCounts { raised, resolved }
}
