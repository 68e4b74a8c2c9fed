use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// 传输层失败时展示给用户的通用提示
pub const GENERIC_FAILURE: &str = "Something went wrong.";

#[derive(Error, Debug)]
pub enum AppError {
    /// 服务端返回了 `error` 字段
    #[error("{0}")]
    Application(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation error: {0}")]
    ValidatorError(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// 网络失败、响应不是 JSON、或响应结构不符
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Request(_) | AppError::Serialization(_) | AppError::Parse(_) | AppError::Url(_)
        )
    }

    /// 弹窗文本：业务错误原样展示，其余一律使用通用提示
    pub fn user_message(&self) -> String {
        match self {
            AppError::Application(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::ValidatorError(errors) => errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Invalid input.".to_string()),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

// 便利函数，用于创建常见错误
impl AppError {
    pub fn not_found(resource: &str) -> Self {
        Self::NotFound(format!("{} not found", resource))
    }

    pub fn validation(msg: &str) -> Self {
        Self::Validation(msg.to_string())
    }
}
