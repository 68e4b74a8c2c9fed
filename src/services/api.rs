use reqwest::{
    header::{COOKIE, REFERER},
    Client, Method, RequestBuilder,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::{
    config::Config,
    error::{AppError, Result},
    models::{
        decode_reply, ComposeRequest, ComposeResponse, EditRequest, EditResponse, FollowAction,
        FollowResponse, LikeResponse, PostId,
    },
    utils::validation::is_valid_username,
};

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// 服务端 JSON 接口的 HTTP 客户端
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
    csrf_token: Option<String>,
    session_id: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        // 保证以 `/` 结尾，相对路径才会拼接在部署前缀之后
        let mut base_url = Url::parse(&config.base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http_client,
            base_url,
            csrf_token: config.csrf_token.clone(),
            session_id: config.session_id.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// POST /compose
    pub async fn compose(&self, request: &ComposeRequest) -> Result<ComposeResponse> {
        let url = self.endpoint("compose")?;
        self.send(self.mutating(Method::POST, url)?.json(request)).await
    }

    /// PUT /like/{post_id}，由服务端翻转点赞状态
    pub async fn toggle_like(&self, post_id: PostId) -> Result<LikeResponse> {
        let url = self.endpoint(&format!("like/{}", post_id))?;
        self.send(self.mutating(Method::PUT, url)?).await
    }

    /// PUT /edit/{post_id}
    pub async fn edit(&self, post_id: PostId, request: &EditRequest) -> Result<EditResponse> {
        let url = self.endpoint(&format!("edit/{}", post_id))?;
        self.send(self.mutating(Method::PUT, url)?.json(request)).await
    }

    /// POST 或 DELETE /follow/{username}
    pub async fn follow(&self, username: &str, action: FollowAction) -> Result<FollowResponse> {
        if !is_valid_username(username) {
            return Err(AppError::validation("Invalid username."));
        }
        let url = self.endpoint(&format!("follow/{}", urlencoding::encode(username)))?;
        self.send(self.mutating(action.method(), url)?).await
    }

    fn mutating(&self, method: Method, url: Url) -> Result<RequestBuilder> {
        let token = self
            .csrf_token
            .as_deref()
            .ok_or_else(|| AppError::Config("CSRF token is not configured".to_string()))?;

        let mut cookie = format!("csrftoken={}", token);
        if let Some(session_id) = &self.session_id {
            cookie.push_str(&format!("; sessionid={}", session_id));
        }

        debug!("{} {}", method, url);
        Ok(self
            .http_client
            .request(method, url)
            .header(CSRF_HEADER, token)
            .header(COOKIE, cookie)
            .header(REFERER, self.base_url.as_str()))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Server responded with {} ({} bytes)", status, body.len());
        decode_reply(status.as_u16(), &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_keep_base_path() {
        let api = ApiClient::new(&Config::new("http://example.test/network", "tok")).unwrap();
        assert_eq!(api.base_url().as_str(), "http://example.test/network/");
        assert_eq!(
            api.endpoint("like/5").unwrap().as_str(),
            "http://example.test/network/like/5"
        );

        let root = ApiClient::new(&Config::new("http://example.test", "tok")).unwrap();
        assert_eq!(root.endpoint("compose").unwrap().as_str(), "http://example.test/compose");
    }

    #[test]
    fn test_username_is_percent_encoded() {
        let api = ApiClient::new(&Config::new("http://example.test", "tok")).unwrap();
        let url = api
            .endpoint(&format!("follow/{}", urlencoding::encode("john doe")))
            .unwrap();
        assert_eq!(url.path(), "/follow/john%20doe");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ApiClient::new(&Config::new("not a url", "tok"));
        assert!(matches!(result, Err(AppError::Url(_))));
    }

    #[tokio::test]
    async fn test_blank_username_is_rejected() {
        let api = ApiClient::new(&Config::new("http://127.0.0.1:9", "tok")).unwrap();
        let result = api.follow("  ", FollowAction::Follow).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_missing_csrf_token_sends_nothing() {
        let mut config = Config::new("http://127.0.0.1:9", "tok");
        config.csrf_token = None;
        let api = ApiClient::new(&config).unwrap();

        let result = api.toggle_like(1).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
