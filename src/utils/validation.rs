/// 去掉首尾空白；空白输入返回 `None`，此时不应发出请求
pub fn normalize_post_text(raw: &str) -> Option<&str> {
    let text = raw.trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// 用户名只能出现在路径段中，不允许为空或包含 `/`
pub fn is_valid_username(username: &str) -> bool {
    !username.trim().is_empty() && !username.contains('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_post_text() {
        assert_eq!(normalize_post_text("  hello \n"), Some("hello"));
        assert_eq!(normalize_post_text(""), None);
        assert_eq!(normalize_post_text(" \t\r\n "), None);
    }

    #[test]
    fn test_is_valid_username() {
        assert!(is_valid_username("alice"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("   "));
        assert!(!is_valid_username("a/b"));
    }

    proptest! {
        #[test]
        fn whitespace_only_is_always_rejected(s in "[ \t\r\n\u{a0}\u{2003}]*") {
            prop_assert_eq!(normalize_post_text(&s), None);
        }

        #[test]
        fn normalized_text_has_no_outer_whitespace(s in "\\PC*") {
            if let Some(text) = normalize_post_text(&s) {
                prop_assert!(!text.is_empty());
                prop_assert_eq!(text, text.trim());
            }
        }
    }
}
