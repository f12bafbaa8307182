#[cfg(test)]
pub mod fixtures {
    /// Six lines with "what is": long enough to be revised.
    pub const DEFINITION_DECK: &str =
        "What is X?\nDefinition here\nMore detail\nEven more\nAnd more\nLast line";

    /// Seven lines mentioning steps.
    pub const PROCESS_DECK: &str =
        "Deploying\nStep 1 build\nStep 2 test\nStep 3 ship\nMonitor\nRollback\nReview";

    /// Four lines with no trigger keywords.
    pub const PLAIN_SLIDE: &str = "Rome\nEmpire\nRepublic\nSenate";
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::http::StatusCode;

    use crate::{
        app_state::AppState, config::Config, services::model_service::MockTextGenerator,
    };

    /// App state around a mocked backend and a fresh session store.
    pub fn state_with(generator: MockTextGenerator) -> AppState {
        AppState::with_generator(Config::test_config(), Arc::new(generator))
    }

    /// Backend that answers every instruction with `reply`.
    pub fn replying_generator(reply: &'static str) -> MockTextGenerator {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_complete()
            .returning(move |_| Ok(reply.to_string()));
        generator
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::{
        models::domain::{build_context, Mode},
        services::mode_resolver::resolve_mode,
    };

    #[test]
    fn test_fixtures_resolve_to_documented_modes() {
        assert_eq!(resolve_mode(&build_context(DEFINITION_DECK, None)), Mode::Revise);
        assert_eq!(resolve_mode(&build_context(PROCESS_DECK, None)), Mode::Visualize);
        assert_eq!(resolve_mode(&build_context(PLAIN_SLIDE, None)), Mode::Game);
    }
}
