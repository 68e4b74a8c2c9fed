use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 服务端使用整数主键
pub type PostId = u64;

/// 帖子内容的长度上限（与服务端字段一致）
pub const MAX_POST_LENGTH: usize = 512;

/// 页面上一条帖子的视图数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: PostId,
    pub text: String,
    pub author: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub was_edited: bool,
    #[serde(default)]
    pub num_likes: u64,
    #[serde(default)]
    pub liked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComposeRequest {
    #[validate(length(min = 1, max = 512, message = "Post text cannot exceed 512 characters."))]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeResponse {
    pub post_id: PostId,
    pub text: String,
    pub created: DateTime<Utc>,
    pub username: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<ComposeResponse> for PostView {
    fn from(resp: ComposeResponse) -> Self {
        Self {
            id: resp.post_id,
            text: resp.text,
            author: resp.username,
            created: resp.created,
            was_edited: false,
            num_likes: 0,
            liked: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub num_likes: u64,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EditRequest {
    #[validate(length(max = 512, message = "Post text cannot exceed 512 characters."))]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditResponse {
    pub new_text: String,
    pub was_edited: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_response_into_view() {
        let resp: ComposeResponse = serde_json::from_str(
            r#"{"post_id":5,"text":"hello","created":"2024-01-01T00:00:00Z","username":"alice"}"#,
        )
        .unwrap();
        let view = PostView::from(resp);

        assert_eq!(view.id, 5);
        assert_eq!(view.author, "alice");
        assert_eq!(view.num_likes, 0);
        assert!(!view.liked);
        assert!(!view.was_edited);
    }

    #[test]
    fn test_compose_request_length() {
        let ok = ComposeRequest { text: "a".repeat(MAX_POST_LENGTH) };
        assert!(ok.validate().is_ok());

        let too_long = ComposeRequest { text: "a".repeat(MAX_POST_LENGTH + 1) };
        assert!(too_long.validate().is_err());

        // 按字符计数而非字节
        let multibyte = ComposeRequest { text: "é".repeat(MAX_POST_LENGTH) };
        assert!(multibyte.validate().is_ok());
    }
}
