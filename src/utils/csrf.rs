use regex::Regex;
use std::sync::OnceLock;

use crate::error::{AppError, Result};

fn meta_tag_regex() -> &'static Regex {
    static META: OnceLock<Regex> = OnceLock::new();
    META.get_or_init(|| {
        Regex::new(r#"(?is)<meta\s[^>]*name\s*=\s*["']csrf-token["'][^>]*>"#)
            .expect("csrf meta regex should compile")
    })
}

fn content_attr_regex() -> &'static Regex {
    static CONTENT: OnceLock<Regex> = OnceLock::new();
    CONTENT.get_or_init(|| {
        Regex::new(r#"(?i)content\s*=\s*["']([^"']*)["']"#)
            .expect("content attribute regex should compile")
    })
}

/// 从服务端渲染的页面中读取 `<meta name="csrf-token" content="...">`
pub fn extract_csrf_token(html: &str) -> Result<String> {
    let tag = meta_tag_regex()
        .find(html)
        .ok_or_else(|| AppError::Config("page has no csrf-token meta tag".to_string()))?;

    let token = content_attr_regex()
        .captures(tag.as_str())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    if token.is_empty() {
        return Err(AppError::Config("csrf-token meta tag is empty".to_string()));
    }
    Ok(token)
}
