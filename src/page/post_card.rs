use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{PostId, PostView};
use crate::utils::format::{display_timestamp, like_label, profile_href};

pub const OWN_POST_LIKE_TITLE: &str = "You can't like your own posts.";
pub const EDITED_MARKER: &str = "(edited)";

/// 帖子卡片的显示/编辑两种状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EditMode {
    Display,
    Editing { draft: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeControl {
    pub liked: bool,
    pub num_likes: u64,
    /// 作者不能给自己点赞，按钮永久禁用
    pub own_post: bool,
    pub busy: bool,
}

impl LikeControl {
    pub fn label(&self) -> String {
        like_label(self.liked, self.num_likes)
    }

    pub fn is_disabled(&self) -> bool {
        self.own_post || self.busy
    }

    pub fn title(&self) -> Option<&'static str> {
        self.own_post.then_some(OWN_POST_LIKE_TITLE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditControl {
    /// 最近一次服务端确认的文本，进入编辑时用作初稿
    pub post_text: String,
    pub visible: bool,
    /// 保存按钮的请求状态
    pub saving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    pub id: PostId,
    pub text: String,
    pub author: String,
    pub author_href: String,
    pub created: DateTime<Utc>,
    pub created_display: String,
    pub edited: bool,
    pub like: LikeControl,
    pub edit: Option<EditControl>,
    pub mode: EditMode,
}

impl PostCard {
    /// `viewer` 为当前登录用户；作者本人看到编辑按钮且点赞按钮禁用
    pub fn from_view(view: PostView, viewer: Option<&str>) -> Self {
        let own_post = viewer == Some(view.author.as_str());
        Self {
            id: view.id,
            author_href: profile_href(&view.author),
            created_display: display_timestamp(&view.created),
            edited: view.was_edited,
            like: LikeControl {
                liked: view.liked,
                num_likes: view.num_likes,
                own_post,
                busy: false,
            },
            edit: own_post.then(|| EditControl {
                post_text: view.text.clone(),
                visible: true,
                saving: false,
            }),
            mode: EditMode::Display,
            text: view.text,
            author: view.author,
            created: view.created,
        }
    }

    pub fn edited_marker(&self) -> &'static str {
        if self.edited {
            EDITED_MARKER
        } else {
            ""
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.mode {
            EditMode::Editing { draft } => Some(draft),
            EditMode::Display => None,
        }
    }

    /// 转回快照数据
    pub fn to_view(&self) -> PostView {
        PostView {
            id: self.id,
            text: self.text.clone(),
            author: self.author.clone(),
            created: self.created,
            was_edited: self.edited,
            num_likes: self.like.num_likes,
            liked: self.like.liked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn view(author: &str) -> PostView {
        PostView {
            id: 5,
            text: "hello".to_string(),
            author: author.to_string(),
            created: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            was_edited: false,
            num_likes: 0,
            liked: false,
        }
    }

    #[test]
    fn test_own_post_card() {
        let card = PostCard::from_view(view("alice"), Some("alice"));
        assert_eq!(card.author_href, "/profile/alice");
        assert_eq!(card.like.label(), "♡ 0");
        assert!(card.like.is_disabled());
        assert_eq!(card.like.title(), Some(OWN_POST_LIKE_TITLE));
        assert_eq!(card.edit.as_ref().map(|e| e.post_text.as_str()), Some("hello"));
        assert_eq!(card.edited_marker(), "");
        assert_eq!(card.created_display, "January 1, 2024, 12:00 a.m.");
    }

    #[test]
    fn test_other_users_post_card() {
        let card = PostCard::from_view(view("bob"), Some("alice"));
        assert!(!card.like.is_disabled());
        assert!(card.like.title().is_none());
        assert!(card.edit.is_none());

        let anonymous = PostCard::from_view(view("bob"), None);
        assert!(anonymous.edit.is_none());
    }

    #[test]
    fn test_to_view_keeps_confirmed_state() {
        let mut v = view("bob");
        v.num_likes = 4;
        v.liked = true;
        v.was_edited = true;
        let card = PostCard::from_view(v.clone(), None);
        assert_eq!(card.to_view(), v);
    }
}
