use std::sync::Arc;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    repositories::InMemorySessionRepository,
    services::{
        generation_service::GenerationService,
        model_service::{GeminiClient, TextGenerator},
        session_service::SessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub session_service: Arc<SessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let generator = GeminiClient::new(&config)
            .map_err(|e| AppError::InternalError(format!("Failed to build Gemini client: {e}")))?;

        if !config.backend_configured() {
            log::warn!("GEMINI_API_KEY not found or invalid; generation will return a fallback message");
        }

        Ok(Self::with_generator(config, Arc::new(generator)))
    }

    /// Wires the services around any backend, e.g. a stub in tests.
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        let session_repository = Arc::new(InMemorySessionRepository::new());
        let session_service = Arc::new(SessionService::new(session_repository));
        let generation_service = Arc::new(GenerationService::new(
            generator,
            Arc::clone(&session_service),
        ));

        Self {
            generation_service,
            session_service,
            config: Arc::new(config),
        }
    }
}
