use serde::Serialize;

use crate::models::domain::{Mode, StructuredSlide};

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_no: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<&'static str>,
    pub mode: Mode,
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponseDto {
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeSlidesResponseDto {
    pub slide_count: usize,
    pub slides: Vec<StructuredSlide>,
}
