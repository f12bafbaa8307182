//! Instruction templates, one per [`Mode`].
//!
//! Every template is a pure function of the [`SlideContext`]: the shared style
//! rules come first, then the mode task, then the slide interpolated verbatim.

use crate::{
    constants::prompts::{
        BASE_RULES, DECK_REVIEW, DEEP_ELABORATION, GAME_ANSWER_FORMAT, GAME_TASK,
        MEMORIZE_OUTPUT, MEMORIZE_TASK, QUESTION_LAYOUT, QUIZ_FORMAT, QUIZ_TASK, REVISE_TASK,
        STANDARD_ELABORATION, VISUALIZE_TASK,
    },
    models::domain::{Mode, SlideContext},
};

/// How much the memorize elaboration should go into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElaborationDepth {
    Standard,
    Deep,
}

impl ElaborationDepth {
    pub fn from_regenerate(regenerate: bool) -> Self {
        if regenerate {
            ElaborationDepth::Deep
        } else {
            ElaborationDepth::Standard
        }
    }
}

pub fn build_prompt(mode: Mode, ctx: &SlideContext) -> String {
    match mode {
        Mode::Memorize => memorize_prompt(ctx),
        Mode::Quiz => quiz_prompt(ctx),
        Mode::Revise => revise_prompt(ctx),
        Mode::Visualize => visualize_prompt(ctx),
        Mode::Game => game_prompt(ctx),
    }
}

fn slide_block(ctx: &SlideContext) -> String {
    format!(
        "Slide Title:\n{}\n\nSlide Content:\n{}\n",
        ctx.title(),
        ctx.raw_text()
    )
}

pub fn memorize_prompt(ctx: &SlideContext) -> String {
    format!(
        "{BASE_RULES}\n{MEMORIZE_TASK}\n\n{}\n{MEMORIZE_OUTPUT}\n\n{QUESTION_LAYOUT}",
        slide_block(ctx)
    )
}

pub fn quiz_prompt(ctx: &SlideContext) -> String {
    format!(
        "{BASE_RULES}\n{QUIZ_TASK}\n\n{}\n{QUIZ_FORMAT}",
        slide_block(ctx)
    )
}

pub fn revise_prompt(ctx: &SlideContext) -> String {
    format!("{BASE_RULES}\n{REVISE_TASK}\n\n{}", slide_block(ctx))
}

pub fn visualize_prompt(ctx: &SlideContext) -> String {
    format!("{BASE_RULES}\n{VISUALIZE_TASK}\n\n{}", slide_block(ctx))
}

pub fn game_prompt(ctx: &SlideContext) -> String {
    format!(
        "{BASE_RULES}\n{GAME_TASK}\n\n{}\n{GAME_ANSWER_FORMAT}",
        slide_block(ctx)
    )
}

/// Dedicated memorize request built straight from the slide text.
pub fn elaboration_prompt(raw_text: &str, depth: ElaborationDepth) -> String {
    let task = match depth {
        ElaborationDepth::Standard => STANDARD_ELABORATION,
        ElaborationDepth::Deep => DEEP_ELABORATION,
    };
    format!("{BASE_RULES}\n{task}\n\n{QUESTION_LAYOUT}\nSlide Content:\n{raw_text}\n")
}

pub fn deck_review_prompt(all_text: &str) -> String {
    format!("{BASE_RULES}\n{DECK_REVIEW}\n\nPresentation Content:\n{all_text}\n")
}
