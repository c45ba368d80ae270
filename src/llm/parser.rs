use serde_json::Value;
use tracing::warn;

use crate::models::{AnalysisReport, ParsedAnalysis};

/// Parse raw model output into an analysis
///
/// Total over any input: extraction tries a ```json fenced block first, then
/// the outermost brace-delimited span, then the full text. Whatever decodes
/// to a JSON object is passed through without schema validation; anything
/// else becomes the fixed fallback report.
pub fn parse_analysis_response(raw: &str) -> ParsedAnalysis {
    let candidate = extract_json_candidate(raw).unwrap_or(raw);

    match serde_json::from_str::<Value>(candidate) {
        Ok(value) if value.is_object() => ParsedAnalysis::Decoded(value),
        _ => {
            warn!(
                "Model response did not decode to a JSON object ({} chars); using fallback report",
                raw.len()
            );
            ParsedAnalysis::Fallback(AnalysisReport::fallback())
        }
    }
}

/// Pick the most plausible JSON span from raw model output
fn extract_json_candidate(raw: &str) -> Option<&str> {
    // A labeled fence wins outright, even if its content turns out invalid
    if let Some(inner) = extract_fenced_json(raw) {
        return Some(inner);
    }

    // Greedy object span: first opening brace to the last closing brace
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start < end).then(|| &raw[start..=end])
}

/// Inner content of the first ```json fenced block, if any
fn extract_fenced_json(raw: &str) -> Option<&str> {
    let fence_start = raw.find("```json")?;
    let body = &raw[fence_start + "```json".len()..];
    let fence_end = body.find("```")?;
    Some(body[..fence_end].trim())
}
