use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{DeckGenerationRequestDto, DeckReviewRequestDto, SlideGenerationRequestDto},
        response::{GenerationResponseDto, ReviewResponseDto},
    },
    services::generation_service::{truncate_chars, GenerationRequest},
};

const DECK_CATEGORY: &str = "general";

#[post("/mcp/review_all")]
pub async fn review_all(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<DeckReviewRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "[{}] Reviewing deck ({} chars)",
        get_request_id(&req).unwrap_or_default(),
        request.all_text.chars().count()
    );

    let output = state
        .generation_service
        .review_deck(&request.all_text, state.config.review_text_limit)
        .await;
    Ok(HttpResponse::Ok().json(ReviewResponseDto { output }))
}

#[post("/mcp/{mode}/all")]
pub async fn generate_for_deck(
    req: HttpRequest,
    state: web::Data<AppState>,
    mode: web::Path<String>,
    request: web::Json<DeckGenerationRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "[{}] Generating {} content for whole deck",
        get_request_id(&req).unwrap_or_default(),
        mode
    );

    let outcome = state
        .generation_service
        .run(GenerationRequest {
            mode: mode.into_inner(),
            raw_text: truncate_chars(&request.all_text, state.config.deck_text_limit).to_string(),
            category: Some(DECK_CATEGORY.to_string()),
            session_id: request.session_id,
            regenerate: request.regenerate,
        })
        .await?;

    Ok(HttpResponse::Ok().json(GenerationResponseDto {
        slide_no: None,
        scope: Some("all"),
        mode: outcome.mode,
        output: outcome.output,
    }))
}

#[post("/mcp/{mode}/{slide_no}")]
pub async fn generate_for_slide(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<(String, u32)>,
    request: web::Json<SlideGenerationRequestDto>,
) -> Result<HttpResponse, AppError> {
    let (mode, slide_no) = path.into_inner();
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "[{}] Generating {} content for slide {}",
        get_request_id(&req).unwrap_or_default(),
        mode,
        slide_no
    );

    let outcome = state
        .generation_service
        .run(GenerationRequest {
            mode,
            raw_text: request.raw_text,
            category: request.category,
            session_id: request.session_id,
            regenerate: request.regenerate,
        })
        .await?;

    Ok(HttpResponse::Ok().json(GenerationResponseDto {
        slide_no: Some(slide_no),
        scope: None,
        mode: outcome.mode,
        output: outcome.output,
    }))
}
