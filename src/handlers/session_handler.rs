use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

#[get("/session/{session_id}/summary")]
pub async fn session_summary(
    state: web::Data<AppState>,
    session_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session_id = session_id.into_inner();
    let summary = state
        .session_service
        .get_summary(&session_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No data for session '{}'", session_id)))?;

    Ok(HttpResponse::Ok().json(summary))
}
