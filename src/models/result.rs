use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::metrics::CallMetrics;
use super::report::ParsedAnalysis;

/// Inbound request for one call analysis
///
/// All fields default when absent so validation happens in the pipeline,
/// where a missing call id gets the proper error instead of a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Identifier of the call on the telephony platform
    #[serde(default)]
    pub call_id: String,
    /// Training scenario the call was run against
    #[serde(default)]
    pub scenario_id: String,
    /// Transcript text, when the caller already holds it
    #[serde(default)]
    pub transcript: Option<String>,
}

/// Merged output of one analysis run
///
/// Carries both halves of the pipeline: the model's narrative assessment and
/// the deterministic metrics, each computed over the same transcript.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedResult {
    pub call_id: String,
    pub scenario_id: String,
    /// Keyword-derived metrics
    pub metrics: CallMetrics,
    /// Model assessment, or the fallback report when decoding failed
    pub analysis: ParsedAnalysis,
    /// When processing finished (UTC)
    pub processed_at: DateTime<Utc>,
}

impl CombinedResult {
    /// Write the result as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write result JSON")?;
        Ok(())
    }
}
