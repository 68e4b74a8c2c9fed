use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use crate::{
    error::{AppError, Result},
    models::{ComposeRequest, PostId, PostView},
    page::{ControlId, Page, PostCard},
    services::{api::ApiClient, notifier::{surface, Notifier}},
    utils::{busy::InFlight, validation::normalize_post_text},
};

/// 发帖：展开表单、提交、把新帖子插到列表最前面
#[derive(Clone)]
pub struct ComposeService {
    api: ApiClient,
    page: Page,
    notifier: Arc<dyn Notifier>,
}

impl ComposeService {
    pub fn new(api: ApiClient, page: Page, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, page, notifier }
    }

    /// 返回表单新的展开状态
    pub fn toggle_form(&self) -> bool {
        self.page.write().compose.toggle()
    }

    pub fn set_text(&self, text: &str) {
        self.page.write().compose.text = text.to_string();
    }

    /// 提交表单中的文本。
    ///
    /// 空白内容或按钮正忙时不发请求，返回 `Ok(None)`；成功时返回新帖子的 id。
    pub async fn submit(&self) -> Result<Option<PostId>> {
        let raw = self.page.read().compose.text.clone();
        let text = match normalize_post_text(&raw) {
            Some(text) => text.to_string(),
            None => {
                debug!("Ignoring blank compose submission");
                return Ok(None);
            }
        };

        let request = ComposeRequest { text };
        if let Err(e) = request.validate() {
            return surface(self.notifier.as_ref(), "composing post", AppError::from(e));
        }

        let _busy = match InFlight::acquire(&self.page, ControlId::ComposeSubmit) {
            Ok(Some(guard)) => guard,
            Ok(None) => return Ok(None),
            Err(e) => return surface(self.notifier.as_ref(), "composing post", e),
        };

        let response = match self.api.compose(&request).await {
            Ok(response) => response,
            Err(e) => return surface(self.notifier.as_ref(), "composing post", e),
        };

        let post_id = response.post_id;
        let view = PostView::from(response);
        let author = view.author.clone();
        {
            let mut page = self.page.write();
            page.prepend_post(PostCard::from_view(view, Some(author.as_str())));
            page.compose.text.clear();
            page.compose.collapse();
        }

        info!("Post {} created by {}", post_id, author);
        Ok(Some(post_id))
    }
}
