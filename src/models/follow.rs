use reqwest::Method;
use serde::{Deserialize, Serialize};

/// 个人主页上的关注关系视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowView {
    pub username: String,
    pub following: bool,
    pub num_followers: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowResponse {
    pub following: bool,
    pub num_followers: u64,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowAction {
    Follow,
    Unfollow,
}

impl FollowAction {
    /// 根据当前关注状态选择动作
    pub fn from_current(following: bool) -> Self {
        if following {
            FollowAction::Unfollow
        } else {
            FollowAction::Follow
        }
    }

    pub fn method(self) -> Method {
        match self {
            FollowAction::Follow => Method::POST,
            FollowAction::Unfollow => Method::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_current_state() {
        assert_eq!(FollowAction::from_current(false).method(), Method::POST);
        assert_eq!(FollowAction::from_current(true).method(), Method::DELETE);
    }
}
