use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

const VAPI_CALL_URL: &str = "https://api.vapi.ai/call";

/// Hard cap on a single transcript fetch
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of transcripts for calls the request did not carry inline
///
/// Implementations never fail: a transcript that cannot be obtained comes
/// back as an empty string, and the pipeline decides what that means.
#[allow(async_fn_in_trait)]
pub trait TranscriptSource {
    /// Fetch the transcript for a call, or empty when unavailable
    async fn fetch_transcript(&self, call_id: &str) -> String;
}

/// Configuration for the Vapi call platform client
#[derive(Debug, Clone)]
pub struct VapiConfig {
    /// API key (from VAPI_API_KEY env var; empty disables fetching)
    pub api_key: String,
}

impl VapiConfig {
    /// Create config from environment variables
    ///
    /// An unset key is not an error here. Analyses that supply their own
    /// transcript never touch the platform.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("VAPI_API_KEY").unwrap_or_default(),
        }
    }

    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

/// Vapi call platform client
pub struct VapiClient {
    client: Client,
    config: VapiConfig,
}

impl VapiClient {
    pub fn new(config: VapiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl TranscriptSource for VapiClient {
    async fn fetch_transcript(&self, call_id: &str) -> String {
        if self.config.api_key.is_empty() {
            warn!("VAPI_API_KEY not set; cannot fetch transcript for call {}", call_id);
            return String::new();
        }

        let url = format!("{}/{}", VAPI_CALL_URL, call_id);
        let response = match self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Transcript fetch failed for call {}: {}", call_id, e);
                return String::new();
            }
        };

        if !response.status().is_success() {
            warn!(
                "Transcript fetch for call {} returned {}",
                call_id,
                response.status()
            );
            return String::new();
        }

        match response.text().await {
            Ok(body) => transcript_field(&body),
            Err(e) => {
                warn!("Failed to read transcript response for call {}: {}", call_id, e);
                String::new()
            }
        }
    }
}

/// Pull the transcript field out of a call payload, or empty
fn transcript_field(body: &str) -> String {
    match serde_json::from_str::<VapiCall>(body) {
        Ok(call) => call.transcript,
        Err(e) => {
            warn!("Unexpected call payload shape: {}", e);
            String::new()
        }
    }
}

#[derive(Debug, Deserialize)]
struct VapiCall {
    #[serde(default)]
    transcript: String,
}
