use std::sync::Arc;
use tracing::info;

use crate::{
    error::{AppError, Result},
    models::{FollowAction, FollowResponse},
    page::{ControlId, Page},
    services::{api::ApiClient, notifier::{surface, Notifier}},
    utils::busy::InFlight,
};

#[derive(Clone)]
pub struct FollowService {
    api: ApiClient,
    page: Page,
    notifier: Arc<dyn Notifier>,
}

impl FollowService {
    pub fn new(api: ApiClient, page: Page, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, page, notifier }
    }

    /// 点击关注按钮：未关注时 POST，已关注时 DELETE；
    /// 按钮状态与粉丝数只取自服务端响应
    pub async fn toggle(&self) -> Result<Option<FollowResponse>> {
        let current = self
            .page
            .read()
            .profile
            .as_ref()
            .map(|p| (p.username.clone(), p.following));
        let (username, following) = match current {
            Some(current) => current,
            None => {
                let e = AppError::not_found("Follow control");
                return surface(self.notifier.as_ref(), "toggling follow", e);
            }
        };
        let action = FollowAction::from_current(following);

        let _busy = match InFlight::acquire(&self.page, ControlId::Follow(username.clone())) {
            Ok(Some(guard)) => guard,
            Ok(None) => return Ok(None),
            Err(e) => return surface(self.notifier.as_ref(), "toggling follow", e),
        };

        let response = match self.api.follow(&username, action).await {
            Ok(response) => response,
            Err(e) => return surface(self.notifier.as_ref(), "toggling follow", e),
        };

        {
            let mut page = self.page.write();
            if let Some(profile) = page.profile.as_mut().filter(|p| p.username == username) {
                profile.following = response.following;
                profile.num_followers = response.num_followers;
            }
        }

        info!(
            "{:?} {}: following={}, num_followers={}",
            action, username, response.following, response.num_followers
        );
        Ok(Some(response))
    }
}
