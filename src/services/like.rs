use std::sync::Arc;
use tracing::info;

use crate::{
    error::Result,
    models::{LikeResponse, PostId},
    page::{ControlId, Page},
    services::{api::ApiClient, notifier::{surface, Notifier}},
    utils::busy::InFlight,
};

#[derive(Clone)]
pub struct LikeService {
    api: ApiClient,
    page: Page,
    notifier: Arc<dyn Notifier>,
}

impl LikeService {
    pub fn new(api: ApiClient, page: Page, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, page, notifier }
    }

    /// 点击点赞按钮。方向由服务端决定，按钮只显示服务端返回的状态和计数。
    pub async fn toggle(&self, post_id: PostId) -> Result<Option<LikeResponse>> {
        let _busy = match InFlight::acquire(&self.page, ControlId::Like(post_id)) {
            Ok(Some(guard)) => guard,
            Ok(None) => return Ok(None),
            Err(e) => return surface(self.notifier.as_ref(), "liking post", e),
        };

        let response = match self.api.toggle_like(post_id).await {
            Ok(response) => response,
            Err(e) => return surface(self.notifier.as_ref(), "liking post", e),
        };

        {
            let mut page = self.page.write();
            let card = match page.post_mut(post_id) {
                Ok(card) => card,
                Err(e) => return surface(self.notifier.as_ref(), "liking post", e),
            };
            card.like.liked = response.liked;
            card.like.num_likes = response.num_likes;
        }

        info!(
            "Post {} like toggled: liked={}, num_likes={}",
            post_id, response.liked, response.num_likes
        );
        Ok(Some(response))
    }
}
