use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server configuration
    pub base_url: String,
    pub environment: String,
    pub log_level: String,

    // 会话与防伪凭证
    pub csrf_token: Option<String>,
    pub session_id: Option<String>,

    // HTTP client
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            base_url: env::var("NETWORK_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "network_client=info".to_string()),

            csrf_token: env::var("CSRF_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            session_id: env::var("SESSION_ID").ok().filter(|s| !s.trim().is_empty()),

            request_timeout_secs: match env::var("REQUEST_TIMEOUT_SECS") {
                Ok(raw) => Some(raw.parse()?),
                Err(_) => None,
            },
        })
    }

    /// 直接构造配置（库调用方与测试使用）
    pub fn new(base_url: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            environment: "development".to_string(),
            log_level: "network_client=info".to_string(),
            csrf_token: Some(csrf_token.into()),
            session_id: None,
            request_timeout_secs: None,
        }
    }

    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = Config::new("http://example.test", "tok").with_session_id("abc");
        assert_eq!(config.base_url, "http://example.test");
        assert_eq!(config.csrf_token.as_deref(), Some("tok"));
        assert_eq!(config.session_id.as_deref(), Some("abc"));
        assert!(config.is_development());
        assert!(!config.is_production());
        assert!(config.request_timeout_secs.is_none());
    }
}
