use serde::Serialize;

use crate::models::{FollowAction, FollowView};
use crate::utils::format::follower_label;

/// 个人主页的关注按钮与粉丝数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowControl {
    pub username: String,
    pub following: bool,
    pub num_followers: u64,
    pub busy: bool,
}

impl FollowControl {
    pub fn label(&self) -> &'static str {
        if self.following {
            "Unfollow"
        } else {
            "Follow"
        }
    }

    pub fn style(&self) -> &'static str {
        if self.following {
            "btn-danger"
        } else {
            "btn-primary"
        }
    }

    pub fn followers_label(&self) -> String {
        follower_label(self.num_followers)
    }

    pub fn next_action(&self) -> FollowAction {
        FollowAction::from_current(self.following)
    }

    pub fn to_view(&self) -> FollowView {
        FollowView {
            username: self.username.clone(),
            following: self.following,
            num_followers: self.num_followers,
        }
    }
}

impl From<FollowView> for FollowControl {
    fn from(view: FollowView) -> Self {
        Self {
            username: view.username,
            following: view.following,
            num_followers: view.num_followers,
            busy: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let mut control = FollowControl::from(FollowView {
            username: "bob".to_string(),
            following: false,
            num_followers: 1,
        });
        assert_eq!(control.label(), "Follow");
        assert_eq!(control.style(), "btn-primary");
        assert_eq!(control.followers_label(), "1 follower");
        assert_eq!(control.next_action(), FollowAction::Follow);

        control.following = true;
        control.num_followers = 2;
        assert_eq!(control.label(), "Unfollow");
        assert_eq!(control.style(), "btn-danger");
        assert_eq!(control.followers_label(), "2 followers");
        assert_eq!(control.next_action(), FollowAction::Unfollow);
    }
}
