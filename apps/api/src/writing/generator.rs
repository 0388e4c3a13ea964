//! Writing pipeline — turns a mode and request fields into a generation result.
//!
//! Flow: screen → lookup_template → resolve_tone → render → LLM complete
//!       → (on any failure) fallback bank → return result.
//!
//! The pipeline is total: every input produces exactly one `GenerationResult`.
//! Nothing here returns an error to the caller.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{field, info, info_span, warn, Instrument, Span};
use uuid::Uuid;

use crate::llm_client::{GenerationParams, TextGenerator};
use crate::writing::fallback::FallbackBank;
use crate::writing::renderer::render;
use crate::writing::safety::{screen_fields, Classifier, Screening, SubstringClassifier};
use crate::writing::templates::lookup_template;
use crate::writing::tone::resolve_tone;

/// Returned when the requested mode is not in the template registry.
pub const MODE_UNAVAILABLE_MESSAGE: &str = "This writing mode is not available yet.";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Caller-supplied inputs. All free text is untrusted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestFields {
    /// Subject, topic or recipient.
    #[serde(default)]
    pub name: String,
    /// Feeling or content description.
    #[serde(default, alias = "desc")]
    pub description: String,
    #[serde(default, alias = "tone")]
    pub depth: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    /// Raw source notes for meeting modes.
    #[serde(default, alias = "rawText", alias = "text")]
    pub raw_text: Option<String>,
}

impl RequestFields {
    /// Raw notes, if supplied and non-blank.
    pub fn source_text(&self) -> Option<&str> {
        self.raw_text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Every caller-supplied string that can reach the prompt, for screening
    /// and the input length cap.
    pub fn free_text(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.language.as_deref());
        fields.extend(self.raw_text.as_deref());
        fields
    }

    pub fn char_count(&self) -> usize {
        self.free_text().iter().map(|f| f.chars().count()).sum()
    }
}

/// Terminal state of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Generated,
    Fallback,
    Blocked,
    ModeUnavailable,
}

/// The structured outcome returned to the caller. `response` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub response: String,
    pub blocked: bool,
    pub is_fallback: bool,
    pub status: Outcome,
}

impl GenerationResult {
    fn generated(text: String) -> Self {
        Self {
            response: text,
            blocked: false,
            is_fallback: false,
            status: Outcome::Generated,
        }
    }

    fn fallback(text: String) -> Self {
        Self {
            response: text,
            blocked: false,
            is_fallback: true,
            status: Outcome::Fallback,
        }
    }

    fn blocked(message: &str) -> Self {
        Self {
            response: message.to_string(),
            blocked: true,
            is_fallback: false,
            status: Outcome::Blocked,
        }
    }

    fn mode_unavailable() -> Self {
        Self {
            response: MODE_UNAVAILABLE_MESSAGE.to_string(),
            blocked: false,
            is_fallback: false,
            status: Outcome::ModeUnavailable,
        }
    }
}

/// Supplies today's date for prompts and date-bearing fallback entries.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

pub fn local_clock() -> Clock {
    Arc::new(|| Local::now().date_naive())
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Owns the pipeline's collaborators. Shared read-only across requests.
#[derive(Clone)]
pub struct Writer {
    generator: Arc<dyn TextGenerator>,
    classifier: Arc<dyn Classifier>,
    fallback: FallbackBank,
    params: GenerationParams,
    clock: Clock,
}

impl Writer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            classifier: Arc::new(SubstringClassifier::default()),
            fallback: FallbackBank::default(),
            params: GenerationParams::DEFAULT,
            clock: local_clock(),
        }
    }

    #[allow(dead_code)]
    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackBank) -> Self {
        self.fallback = fallback;
        self
    }

    #[allow(dead_code)]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Runs the full pipeline for one request.
    ///
    /// Steps:
    /// 1. screen every free-text field → Blocked on veto
    /// 2. lookup_template(mode) → ModeUnavailable when unknown
    /// 3. resolve_tone(depth) → depth + tone phrase
    /// 4. render → prompt with language directive
    /// 5. complete → Generated, or Fallback on any error / empty text
    pub async fn generate(&self, mode: &str, fields: &RequestFields) -> GenerationResult {
        // Only the canonical mode is recorded; the caller's string is never logged.
        let span = info_span!("generate", request_id = %Uuid::new_v4(), mode = field::Empty);
        self.run(mode, fields).instrument(span).await
    }

    async fn run(&self, mode: &str, fields: &RequestFields) -> GenerationResult {
        // Step 1: Safety gate
        if let Screening::Blocked(reason) = screen_fields(self.classifier.as_ref(), &fields.free_text()) {
            info!(reason = ?reason, "request blocked by safety filter");
            return GenerationResult::blocked(reason.message());
        }

        // Step 2: Template lookup
        let Some(template) = lookup_template(mode) else {
            Span::current().record("mode", "unknown");
            info!("mode not available");
            return GenerationResult::mode_unavailable();
        };
        Span::current().record("mode", template.mode.as_str());

        // Step 3: Tone
        let tone = resolve_tone(fields.depth.as_deref(), template.mode.family());

        // Step 4: Render
        let today = (self.clock)();
        let prompt = render(&template, fields, tone.phrase, today);

        // Step 5: Generate, or substitute fallback content
        match self.generator.complete(&prompt, &self.params).await {
            Ok(text) if !text.trim().is_empty() => {
                info!(depth = tone.depth.as_str(), "generated {} chars", text.len());
                GenerationResult::generated(text.trim().to_string())
            }
            Ok(_) => {
                warn!("generation returned empty text, serving fallback");
                GenerationResult::fallback(self.fallback.pick(template.mode, tone.depth, today))
            }
            Err(e) => {
                warn!(error = %e, "generation failed, serving fallback");
                GenerationResult::fallback(self.fallback.pick(template.mode, tone.depth, today))
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
