pub mod mcp_handler;
pub mod session_handler;
pub mod slide_handler;

pub use mcp_handler::{generate_for_deck, generate_for_slide, review_all};
pub use session_handler::session_summary;
pub use slide_handler::{analyze_slides, health_check};
