use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, Result};

/// 结构化错误格式 `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// 解析服务端 JSON 响应。
///
/// 无论状态码如何都按 JSON 解析；出现非空 `error` 字段时优先返回业务错误，
/// 其余字段一概不使用。
pub fn decode_reply<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| AppError::Parse(format!("HTTP {} response is not JSON: {}", status, e)))?;

    if !value.is_object() {
        return Err(AppError::Parse(format!(
            "HTTP {} response is not a JSON object",
            status
        )));
    }

    if let Some(message) = error_message(&value) {
        return Err(AppError::Application(message));
    }

    Ok(serde_json::from_value(value)?)
}

fn error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(false) => None,
        other => match serde_json::from_value::<ErrorDetail>(other.clone()) {
            Ok(detail) if !detail.message.is_empty() => Some(detail.message),
            Ok(_) => None,
            Err(_) => Some(other.to_string()),
        },
    }
}
