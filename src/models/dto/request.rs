use serde::Deserialize;
use validator::Validate;

use crate::models::domain::Slide;

pub const DEFAULT_SESSION_ID: &str = "default";

fn default_session_id() -> String {
    DEFAULT_SESSION_ID.to_string()
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SlideGenerationRequestDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "raw_text required"))]
    pub raw_text: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default = "default_session_id")]
    pub session_id: String,

    #[serde(default)]
    pub regenerate: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeckGenerationRequestDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "all_text required"))]
    pub all_text: String,

    #[serde(default = "default_session_id")]
    pub session_id: String,

    #[serde(default)]
    pub regenerate: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeckReviewRequestDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "No text provided"))]
    pub all_text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnalyzeSlidesRequestDto {
    #[validate(length(min = 1, message = "slides required"))]
    pub slides: Vec<Slide>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_request_defaults_optional_fields() {
        let dto: SlideGenerationRequestDto =
            serde_json::from_str(r#"{"raw_text": "Title\nPoint"}"#).expect("should parse");

        assert_eq!(dto.session_id, DEFAULT_SESSION_ID);
        assert!(!dto.regenerate);
        assert!(dto.category.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn missing_raw_text_fails_validation() {
        let dto: SlideGenerationRequestDto =
            serde_json::from_str(r#"{"session_id": "s1"}"#).expect("should parse");

        assert!(dto.raw_text.is_empty());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn deck_request_requires_text() {
        let dto: DeckGenerationRequestDto =
            serde_json::from_str(r#"{"all_text": ""}"#).expect("should parse");
        assert!(dto.validate().is_err());
    }

    #[test]
    fn analyze_request_requires_slides() {
        let dto: AnalyzeSlidesRequestDto =
            serde_json::from_str(r#"{"slides": []}"#).expect("should parse");
        assert!(dto.validate().is_err());
    }
}
