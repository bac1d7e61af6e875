//! Natural-language summaries of store records.
//!
//! Summaries never fail by signature: any error while generating one is
//! rendered into the returned text with the [`ANALYSIS_FAILED_PREFIX`].

use std::future::Future;
use std::time::Duration;

use serde_json::{json, Value};
use storelens_core::{AppConfig, StoreRecord};

use crate::error::InsightsError;

/// Prefix of every summary that reports a generation failure.
pub const ANALYSIS_FAILED_PREFIX: &str = "analysis failed: ";

const SUMMARY_TIMEOUT_SECS: u64 = 60;

const ANALYST_INSTRUCTIONS: &str = "You are an expert e-commerce analyst. Given the following \
Shopify store data, provide a concise summary, highlight key insights, and suggest any \
improvements or missing information. If competitors are provided, compare the main brand \
with its competitors.";

/// Turns one primary record plus zero or more competitor records into prose.
pub trait Summarizer {
    fn summarize(
        &self,
        brand: &StoreRecord,
        competitors: &[StoreRecord],
    ) -> impl Future<Output = String> + Send;
}

/// Builds the analyst prompt: instructions, the brand record as pretty JSON,
/// then the competitor records as pretty JSON or `None`.
#[must_use]
pub fn build_prompt(brand: &StoreRecord, competitors: &[StoreRecord]) -> String {
    let brand_json = serde_json::to_string_pretty(brand).unwrap_or_default();
    let competitors_json = if competitors.is_empty() {
        "None".to_string()
    } else {
        serde_json::to_string_pretty(competitors).unwrap_or_default()
    };

    format!(
        "{ANALYST_INSTRUCTIONS}\n\nMain Brand Data:\n{brand_json}\n\nCompetitors Data:\n{competitors_json}\n"
    )
}

fn failure_text(reason: impl std::fmt::Display) -> String {
    format!("{ANALYSIS_FAILED_PREFIX}{reason}")
}

// ---------------------------------------------------------------------------
// Gemini
// ---------------------------------------------------------------------------

/// Calls the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiSummarizer {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiSummarizer {
    /// # Errors
    ///
    /// Returns [`InsightsError::Http`] if the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Result<Self, InsightsError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(SUMMARY_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            api_base: api_base.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    async fn generate(&self, prompt: &str) -> Result<String, InsightsError> {
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsightsError::Generation(format!(
                "unexpected HTTP status {}",
                status.as_u16()
            )));
        }

        let body: Value = response.json().await?;
        extract_candidate_text(&body)
            .ok_or_else(|| InsightsError::Generation("response contained no text".to_string()))
    }
}

impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, brand: &StoreRecord, competitors: &[StoreRecord]) -> String {
        let prompt = build_prompt(brand, competitors);
        match self.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(url = %brand.url, error = %e, "summary generation failed");
                failure_text(e)
            }
        }
    }
}

/// Concatenates `candidates[0].content.parts[*].text`; `None` when absent
/// or blank.
fn extract_candidate_text(body: &Value) -> Option<String> {
    let parts = body
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    (!text.trim().is_empty()).then_some(text)
}

// ---------------------------------------------------------------------------
// Disabled / configured
// ---------------------------------------------------------------------------

/// Used when no API key is configured. Always reports a failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSummarizer;

impl Summarizer for DisabledSummarizer {
    async fn summarize(&self, _brand: &StoreRecord, _competitors: &[StoreRecord]) -> String {
        failure_text("no text-generation API key configured")
    }
}

/// The summarizer selected by application config.
#[derive(Debug, Clone)]
pub enum ConfiguredSummarizer {
    Gemini(GeminiSummarizer),
    Disabled(DisabledSummarizer),
}

impl ConfiguredSummarizer {
    /// Gemini when an API key is configured, otherwise disabled.
    ///
    /// # Errors
    ///
    /// Returns [`InsightsError::Http`] if the Gemini HTTP client cannot be built.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, InsightsError> {
        match config.gemini_api_key.as_deref() {
            Some(key) if config.summaries_enabled() => Ok(Self::Gemini(GeminiSummarizer::new(
                key,
                config.gemini_model.as_str(),
                config.gemini_api_base.as_str(),
            )?)),
            _ => {
                tracing::info!("GEMINI_API_KEY not set; summaries disabled");
                Ok(Self::Disabled(DisabledSummarizer))
            }
        }
    }
}

impl Summarizer for ConfiguredSummarizer {
    async fn summarize(&self, brand: &StoreRecord, competitors: &[StoreRecord]) -> String {
        match self {
            Self::Gemini(inner) => inner.summarize(brand, competitors).await,
            Self::Disabled(inner) => inner.summarize(brand, competitors).await,
        }
    }
}
