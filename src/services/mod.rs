pub mod answer_parser;
pub mod generation_service;
pub mod mode_resolver;
pub mod model_service;
pub mod prompt_registry;
pub mod session_service;
pub mod slide_service;
