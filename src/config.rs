use std::env;

use secrecy::SecretString;

const API_KEY_PLACEHOLDER: &str = "your_gemini_api_key";

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: Option<SecretString>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub backend_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub deck_text_limit: usize,
    pub review_text_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: parse_api_key(env::var("GEMINI_API_KEY").ok()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            backend_timeout_secs: env::var("BACKEND_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(60),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| {
                    "http://localhost:3000,http://localhost:3001,http://localhost:5173"
                        .to_string()
                }),
            ),
            deck_text_limit: env::var("DECK_TEXT_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(30_000),
            review_text_limit: env::var("REVIEW_TEXT_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(20_000),
        }
    }

    /// Whether a usable Gemini API key was supplied.
    pub fn backend_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: "gemini-test".to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            backend_timeout_secs: 1,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            deck_text_limit: 30_000,
            review_text_limit: 20_000,
        }
    }
}

/// Blank keys and the `.env` template placeholder both count as missing.
fn parse_api_key(raw: Option<String>) -> Option<SecretString> {
    let key = raw?.trim().to_string();
    if key.is_empty() || key.contains(API_KEY_PLACEHOLDER) {
        return None;
    }
    Some(SecretString::from(key))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
