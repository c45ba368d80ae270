use chrono::Utc;
use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::heuristics::{extract_call_metrics, MetricsConfig};
use crate::llm::{build_analysis_prompt, parse_analysis_response, CompletionProvider};
use crate::models::{AnalyzeRequest, CombinedResult};
use crate::transcript::TranscriptSource;

/// Validate a request and run the pipeline
///
/// This is the entry-point contract without the routing glue: a request
/// missing its call id is rejected before any collaborator is touched.
pub async fn handle_request<C, S>(
    client: &C,
    transcripts: &S,
    request: AnalyzeRequest,
) -> Result<CombinedResult, AnalysisError>
where
    C: CompletionProvider,
    S: TranscriptSource,
{
    if request.call_id.is_empty() {
        return Err(AnalysisError::MissingCallId);
    }

    analyze(
        client,
        transcripts,
        &request.call_id,
        &request.scenario_id,
        request.transcript,
    )
    .await
}

/// Run the full analysis pipeline for one call
///
/// The narrative assessment and the heuristic metrics are computed
/// independently over the same transcript snapshot, then merged into one
/// result stamped with the completion time. A transcript that cannot be
/// resolved or a provider failure aborts the whole invocation: no partial
/// result, no retry.
pub async fn analyze<C, S>(
    client: &C,
    transcripts: &S,
    call_id: &str,
    scenario_id: &str,
    transcript: Option<String>,
) -> Result<CombinedResult, AnalysisError>
where
    C: CompletionProvider,
    S: TranscriptSource,
{
    let transcript = match transcript.filter(|t| !t.is_empty()) {
        Some(text) => text,
        None => {
            debug!("No transcript supplied for call {}; fetching", call_id);
            transcripts.fetch_transcript(call_id).await
        }
    };

    if transcript.is_empty() {
        return Err(AnalysisError::NoTranscript);
    }

    info!(
        "Analyzing call {} ({} chars of transcript)",
        call_id,
        transcript.len()
    );

    let prompt = build_analysis_prompt(&transcript, scenario_id);
    let raw = client.complete(&prompt).await?;
    let analysis = parse_analysis_response(&raw);

    let metrics = extract_call_metrics(&transcript, &MetricsConfig::default());

    Ok(CombinedResult {
        call_id: call_id.to_string(),
        scenario_id: scenario_id.to_string(),
        metrics,
        analysis,
        processed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const SALES_CALL: &str = "I'm concerned about the cost. It's expensive. When can we schedule \
                              a meeting? Yes, let's schedule for next Tuesday at 2pm. Sounds good!";

    /// Completion double returning a scripted response and counting calls
    struct ScriptedProvider {
        response: Option<String>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn returning(response: &str) -> Self {
            Self {
                response: Some(response.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                response: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CompletionProvider for ScriptedProvider {
        async fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Some(text) => Ok(text.clone()),
                None => Err(anyhow::anyhow!("provider unavailable")),
            }
        }
    }

    /// Transcript source double with a fixed payload and call counter
    struct ScriptedSource {
        transcript: String,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn returning(transcript: &str) -> Self {
            Self {
                transcript: transcript.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn empty() -> Self {
            Self::returning("")
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TranscriptSource for ScriptedSource {
        async fn fetch_transcript(&self, _call_id: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.transcript.clone()
        }
    }

    #[tokio::test]
    async fn test_analyze_with_supplied_transcript() {
        let provider = ScriptedProvider::returning(r#"{"overall_score": 88}"#);
        let source = ScriptedSource::empty();

        let before = Utc::now();
        let result = analyze(
            &provider,
            &source,
            "call_1",
            "discovery",
            Some(SALES_CALL.to_string()),
        )
        .await
        .unwrap();

        assert_eq!(result.call_id, "call_1");
        assert_eq!(result.scenario_id, "discovery");
        // The supplied transcript is used directly
        assert_eq!(source.call_count(), 0);
        assert_eq!(provider.call_count(), 1);
        assert!(result.metrics.meeting_booked);
        assert_eq!(result.metrics.objections_raised, 3);
        assert!(!result.analysis.is_fallback());
        assert!(result.processed_at >= before);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["analysis"]["overall_score"], 88);
    }

    #[tokio::test]
    async fn test_analyze_fetches_missing_transcript() {
        let provider = ScriptedProvider::returning(r#"{"overall_score": 70}"#);
        let source = ScriptedSource::returning(SALES_CALL);

        let result = analyze(&provider, &source, "call_2", "renewal", None)
            .await
            .unwrap();

        assert_eq!(source.call_count(), 1);
        assert_eq!(result.metrics.word_count, 23);
    }

    #[tokio::test]
    async fn test_analyze_treats_empty_supplied_transcript_as_missing() {
        let provider = ScriptedProvider::returning(r#"{"overall_score": 70}"#);
        let source = ScriptedSource::returning(SALES_CALL);

        let result = analyze(&provider, &source, "call_3", "", Some(String::new()))
            .await
            .unwrap();

        assert_eq!(source.call_count(), 1);
        assert!(result.metrics.sale_closed);
    }

    #[tokio::test]
    async fn test_analyze_fails_without_any_transcript() {
        let provider = ScriptedProvider::returning(r#"{"overall_score": 70}"#);
        let source = ScriptedSource::empty();

        let err = analyze(&provider, &source, "call_4", "demo", None)
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::NoTranscript));
        assert_eq!(err.status_code(), 500);
        // Nothing else runs once transcript resolution fails
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_analyze_propagates_provider_failure() {
        let provider = ScriptedProvider::failing();
        let source = ScriptedSource::empty();

        let err = analyze(
            &provider,
            &source,
            "call_5",
            "demo",
            Some(SALES_CALL.to_string()),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AnalysisError::Provider(_)));
        assert_eq!(err.status_code(), 500);
        // Single attempt, no retry
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_analyze_substitutes_fallback_for_junk_response() {
        let provider = ScriptedProvider::returning("I am unable to produce JSON today.");
        let source = ScriptedSource::empty();

        let result = analyze(
            &provider,
            &source,
            "call_6",
            "demo",
            Some(SALES_CALL.to_string()),
        )
        .await
        .unwrap();

        // The request still succeeds with the neutral report in place
        assert!(result.analysis.is_fallback());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["analysis"]["overall_score"], 75);
        // Metrics are unaffected by the parse failure
        assert_eq!(value["metrics"]["objections_raised"], 3);
    }

    #[tokio::test]
    async fn test_handle_request_rejects_missing_call_id() {
        let provider = ScriptedProvider::returning("{}");
        let source = ScriptedSource::returning(SALES_CALL);

        let request: AnalyzeRequest = serde_json::from_str(r#"{"scenario_id": "demo"}"#).unwrap();
        let err = handle_request(&provider, &source, request).await.unwrap_err();

        assert!(matches!(err, AnalysisError::MissingCallId));
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.error_body(),
            serde_json::json!({"error": "call_id is required"})
        );
        // Rejected before any collaborator runs
        assert_eq!(provider.call_count(), 0);
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_handle_request_runs_pipeline() {
        let provider = ScriptedProvider::returning(r#"{"overall_score": 92}"#);
        let source = ScriptedSource::empty();

        let request = AnalyzeRequest {
            call_id: "call_7".to_string(),
            scenario_id: "cold_outreach".to_string(),
            transcript: Some(SALES_CALL.to_string()),
        };
        let result = handle_request(&provider, &source, request).await.unwrap();

        assert_eq!(result.call_id, "call_7");
        assert_eq!(result.scenario_id, "cold_outreach");
        assert_eq!(provider.call_count(), 1);
    }
}
