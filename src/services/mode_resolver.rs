use crate::models::domain::{Mode, SlideContext};

/// Picks a mode for `auto` requests. Rules are checked in order and the first
/// match wins, so a long deck mentioning "step" is still a visualization.
pub fn resolve_mode(ctx: &SlideContext) -> Mode {
    let text = ctx.raw_text().to_lowercase();
    let line_count = ctx.lines().len();

    if line_count <= 3 {
        return Mode::Memorize;
    }
    if text.contains("step") || text.contains("process") {
        return Mode::Visualize;
    }
    if line_count >= 6 {
        return Mode::Revise;
    }
    if text.contains("define") || text.contains("what is") {
        return Mode::Quiz;
    }
    Mode::Game
}
