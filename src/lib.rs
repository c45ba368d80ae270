pub mod error;
pub mod heuristics;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod transcript;

pub use error::AnalysisError;
pub use heuristics::{extract_call_metrics, MetricsConfig};
pub use llm::{
    build_analysis_prompt, parse_analysis_response, AnthropicClient, AnthropicConfig,
    CompletionProvider,
};
pub use models::{
    AnalysisReport, AnalyzeRequest, CallMetrics, CombinedResult, KeyMoment, ParsedAnalysis,
};
pub use pipeline::{analyze, handle_request};
pub use transcript::{TranscriptSource, VapiClient, VapiConfig};
