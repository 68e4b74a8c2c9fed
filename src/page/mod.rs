//! 页面视图状态
//!
//! 服务端负责渲染初始页面，客户端只维护最近一次服务端确认的快照，
//! 以及每个控件的"请求进行中"标记。

pub mod compose_form;
pub mod follow_control;
pub mod post_card;

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{PageSnapshot, PostId};

pub use compose_form::ComposeForm;
pub use follow_control::FollowControl;
pub use post_card::{EditControl, EditMode, LikeControl, PostCard};

/// 共享页面句柄；锁只在同步代码中短暂持有，不跨越 await
pub type Page = Arc<RwLock<PageState>>;

pub fn new_page(state: PageState) -> Page {
    Arc::new(RwLock::new(state))
}

/// 触发请求的控件标识
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlId {
    ComposeSubmit,
    Like(PostId),
    Save(PostId),
    Follow(String),
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlId::ComposeSubmit => write!(f, "compose-submit"),
            ControlId::Like(id) => write!(f, "like-{}", id),
            ControlId::Save(id) => write!(f, "save-{}", id),
            ControlId::Follow(username) => write!(f, "follow-{}", username),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageState {
    viewer: Option<String>,
    posts: Vec<PostCard>,
    /// "还没有帖子" 占位提示
    pub show_empty_placeholder: bool,
    pub compose: ComposeForm,
    pub profile: Option<FollowControl>,
}

impl PageState {
    pub fn from_snapshot(snapshot: PageSnapshot) -> Self {
        let viewer = snapshot.viewer;
        let posts: Vec<PostCard> = snapshot
            .posts
            .into_iter()
            .map(|view| PostCard::from_view(view, viewer.as_deref()))
            .collect();

        Self {
            show_empty_placeholder: posts.is_empty(),
            posts,
            viewer,
            compose: ComposeForm::default(),
            profile: snapshot.profile.map(FollowControl::from),
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            viewer: self.viewer.clone(),
            posts: self.posts.iter().map(PostCard::to_view).collect(),
            profile: self.profile.as_ref().map(FollowControl::to_view),
        }
    }

    pub fn viewer(&self) -> Option<&str> {
        self.viewer.as_deref()
    }

    pub fn posts(&self) -> &[PostCard] {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&PostCard> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn post_mut(&mut self, id: PostId) -> Result<&mut PostCard> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found(&format!("Post card {}", id)))
    }

    /// 新帖子放在最前面，并移除占位提示
    pub fn prepend_post(&mut self, card: PostCard) {
        self.posts.insert(0, card);
        self.show_empty_placeholder = false;
    }

    fn profile_mut(&mut self, username: &str) -> Result<&mut FollowControl> {
        self.profile
            .as_mut()
            .filter(|p| p.username == username)
            .ok_or_else(|| AppError::not_found(&format!("Follow control for {}", username)))
    }

    /// 控件当前可交互时标记为进行中并返回 `true`；
    /// 已禁用（请求未完成或本人帖子）时返回 `false`
    pub fn try_mark_busy(&mut self, control: &ControlId) -> Result<bool> {
        let flag = match control {
            ControlId::ComposeSubmit => &mut self.compose.busy,
            ControlId::Like(id) => {
                let like = &mut self.post_mut(*id)?.like;
                if like.own_post {
                    return Ok(false);
                }
                &mut like.busy
            }
            ControlId::Save(id) => {
                &mut self
                    .post_mut(*id)?
                    .edit
                    .as_mut()
                    .ok_or_else(|| AppError::not_found(&format!("Edit control {}", id)))?
                    .saving
            }
            ControlId::Follow(username) => &mut self.profile_mut(username)?.busy,
        };

        if *flag {
            return Ok(false);
        }
        *flag = true;
        Ok(true)
    }

    pub fn clear_busy(&mut self, control: &ControlId) {
        match control {
            ControlId::ComposeSubmit => self.compose.busy = false,
            ControlId::Like(id) => {
                if let Ok(card) = self.post_mut(*id) {
                    card.like.busy = false;
                }
            }
            ControlId::Save(id) => {
                if let Some(edit) = self.post_mut(*id).ok().and_then(|c| c.edit.as_mut()) {
                    edit.saving = false;
                }
            }
            ControlId::Follow(username) => {
                if let Ok(profile) = self.profile_mut(username) {
                    profile.busy = false;
                }
            }
        }
    }

    pub fn is_busy(&self, control: &ControlId) -> bool {
        match control {
            ControlId::ComposeSubmit => self.compose.busy,
            ControlId::Like(id) => self.post(*id).map(|c| c.like.busy).unwrap_or(false),
            ControlId::Save(id) => self
                .post(*id)
                .and_then(|c| c.edit.as_ref())
                .map(|e| e.saving)
                .unwrap_or(false),
            ControlId::Follow(username) => self
                .profile
                .as_ref()
                .filter(|p| &p.username == username)
                .map(|p| p.busy)
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FollowView, PostView};
    use chrono::{TimeZone, Utc};

    fn post(id: PostId, author: &str) -> PostView {
        PostView {
            id,
            text: format!("post {}", id),
            author: author.to_string(),
            created: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            was_edited: false,
            num_likes: 1,
            liked: false,
        }
    }

    fn state() -> PageState {
        PageState::from_snapshot(PageSnapshot {
            viewer: Some("alice".to_string()),
            posts: vec![post(2, "bob"), post(1, "alice")],
            profile: Some(FollowView {
                username: "bob".to_string(),
                following: false,
                num_followers: 0,
            }),
        })
    }

    #[test]
    fn test_empty_snapshot_shows_placeholder() {
        let state = PageState::from_snapshot(PageSnapshot::default());
        assert!(state.show_empty_placeholder);
        assert!(state.posts().is_empty());
        assert!(state.profile.is_none());
    }

    #[test]
    fn test_busy_marking() {
        let mut state = state();

        assert!(state.try_mark_busy(&ControlId::Like(2)).unwrap());
        assert!(!state.try_mark_busy(&ControlId::Like(2)).unwrap());
        assert!(state.is_busy(&ControlId::Like(2)));
        state.clear_busy(&ControlId::Like(2));
        assert!(!state.is_busy(&ControlId::Like(2)));

        // 本人帖子的点赞按钮始终不可用
        assert!(!state.try_mark_busy(&ControlId::Like(1)).unwrap());

        assert!(state.try_mark_busy(&ControlId::Save(1)).unwrap());
        assert!(matches!(
            state.try_mark_busy(&ControlId::Save(2)),
            Err(AppError::NotFound(_))
        ));

        assert!(state.try_mark_busy(&ControlId::Follow("bob".to_string())).unwrap());
        assert!(matches!(
            state.try_mark_busy(&ControlId::Follow("carol".to_string())),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            state.try_mark_busy(&ControlId::Like(99)),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_prepend_and_snapshot() {
        let mut state = PageState::from_snapshot(PageSnapshot {
            viewer: Some("alice".to_string()),
            ..PageSnapshot::default()
        });
        state.prepend_post(PostCard::from_view(post(1, "alice"), Some("alice")));
        state.prepend_post(PostCard::from_view(post(2, "alice"), Some("alice")));

        assert!(!state.show_empty_placeholder);
        let ids: Vec<PostId> = state.snapshot().posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
