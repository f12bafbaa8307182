pub mod mode;
pub mod session_stats;
pub mod slide;
pub mod slide_context;
pub use mode::{Mode, RequestedMode};
pub use session_stats::{SessionStats, SessionSummary};
pub use slide::{DiagramType, Slide, SlideCategory, StructuredSlide};
pub use slide_context::{build_context, SlideContext};
