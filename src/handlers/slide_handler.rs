use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    errors::AppError,
    models::dto::{request::AnalyzeSlidesRequestDto, response::AnalyzeSlidesResponseDto},
    services::slide_service::structure_slides,
};

/// Classifies and structures slides that were already extracted from a deck.
#[post("/slides/analyze")]
pub async fn analyze_slides(
    request: web::Json<AnalyzeSlidesRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let slides = structure_slides(request.slides);
    log::info!("Structured {} slides", slides.len());

    Ok(HttpResponse::Ok().json(AnalyzeSlidesResponseDto {
        slide_count: slides.len(),
        slides,
    }))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
