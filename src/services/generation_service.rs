use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{build_context, Mode, RequestedMode},
    services::{
        mode_resolver::resolve_mode,
        model_service::{BackendError, TextGenerator},
        prompt_registry::{build_prompt, deck_review_prompt, elaboration_prompt, ElaborationDepth},
        session_service::SessionService,
    },
};

/// Score recorded for every quiz/game generation. Nothing grades the learner's
/// answers at generation time, so the value is fixed.
pub const PLACEHOLDER_CORRECT: u32 = 3;
pub const PLACEHOLDER_TOTAL: u32 = 5;

pub const UNAVAILABLE_MESSAGE: &str =
    "AI Generation Unavailable: please configure GEMINI_API_KEY for the backend";

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub mode: String,
    pub raw_text: String,
    pub category: Option<String>,
    pub session_id: String,
    pub regenerate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub mode: Mode,
    pub output: String,
}

pub struct GenerationService {
    generator: Arc<dyn TextGenerator>,
    session_service: Arc<SessionService>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn TextGenerator>, session_service: Arc<SessionService>) -> Self {
        Self {
            generator,
            session_service,
        }
    }

    /// Routes a request to its mode, calls the backend once and returns the raw
    /// text. Only an unsupported mode is reported as an error.
    pub async fn run(&self, request: GenerationRequest) -> AppResult<GenerationOutcome> {
        let requested: RequestedMode = request.mode.parse()?;
        let ctx = build_context(&request.raw_text, request.category.as_deref());

        let mode = match requested {
            RequestedMode::Auto => {
                let resolved = resolve_mode(&ctx);
                log::info!("Auto-detected mode {} for slide '{}'", resolved, ctx.title());
                resolved
            }
            RequestedMode::Explicit(mode) => mode,
        };

        let instruction = match mode {
            Mode::Memorize => elaboration_prompt(
                ctx.raw_text(),
                ElaborationDepth::from_regenerate(request.regenerate),
            ),
            _ => build_prompt(mode, &ctx),
        };

        log::debug!(
            "Dispatching {} request ({} chars) for session {}",
            mode,
            instruction.len(),
            request.session_id
        );

        let output = match self.generator.complete(&instruction).await {
            Ok(text) => {
                if mode.is_scored() {
                    self.session_service
                        .record_attempt(
                            &request.session_id,
                            ctx.title(),
                            PLACEHOLDER_CORRECT,
                            PLACEHOLDER_TOTAL,
                        )
                        .await?;
                }
                text
            }
            Err(err) => degraded_output(mode, &err),
        };

        Ok(GenerationOutcome { mode, output })
    }

    /// Summary, key takeaways and a final exam for a whole deck.
    pub async fn review_deck(&self, all_text: &str, limit: usize) -> String {
        let instruction = deck_review_prompt(truncate_chars(all_text, limit));

        match self.generator.complete(&instruction).await {
            Ok(text) => text,
            Err(err) => {
                log::warn!("Deck review degraded: {err}");
                sentinel_for(&err)
            }
        }
    }
}

fn degraded_output(mode: Mode, err: &BackendError) -> String {
    log::warn!("Generation for mode {mode} degraded: {err}");
    sentinel_for(err)
}

fn sentinel_for(err: &BackendError) -> String {
    match err {
        BackendError::NotConfigured => UNAVAILABLE_MESSAGE.to_string(),
        other => format!("Error using Gemini API: {other}"),
    }
}

/// Cuts `text` to at most `limit` characters on a char boundary.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
