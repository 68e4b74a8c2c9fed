use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use crate::{
    error::{AppError, Result},
    models::{EditRequest, EditResponse, PostId},
    page::{ControlId, EditMode, Page},
    services::{api::ApiClient, notifier::{surface, Notifier}},
    utils::busy::InFlight,
};

/// 编辑流程：display -> editing -> display
#[derive(Clone)]
pub struct EditService {
    api: ApiClient,
    page: Page,
    notifier: Arc<dyn Notifier>,
}

impl EditService {
    pub fn new(api: ApiClient, page: Page, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, page, notifier }
    }

    /// 用最近一次确认的文本作为初稿进入编辑状态，并隐藏编辑按钮
    pub fn begin(&self, post_id: PostId) -> Result<()> {
        let mut page = self.page.write();
        let card = page.post_mut(post_id)?;
        if card.is_editing() {
            return Ok(());
        }
        let edit = card
            .edit
            .as_mut()
            .ok_or_else(|| AppError::not_found(&format!("Edit control {}", post_id)))?;

        edit.visible = false;
        let draft = edit.post_text.clone();
        card.mode = EditMode::Editing { draft };
        debug!("Editing post {}", post_id);
        Ok(())
    }

    pub fn set_draft(&self, post_id: PostId, text: &str) -> Result<()> {
        let mut page = self.page.write();
        match &mut page.post_mut(post_id)?.mode {
            EditMode::Editing { draft } => {
                *draft = text.to_string();
                Ok(())
            }
            EditMode::Display => Err(AppError::not_found(&format!("Edit field for post {}", post_id))),
        }
    }

    /// 放弃草稿，回到显示状态
    pub fn cancel(&self, post_id: PostId) -> Result<()> {
        let mut page = self.page.write();
        let card = page.post_mut(post_id)?;
        card.mode = EditMode::Display;
        if let Some(edit) = card.edit.as_mut() {
            edit.visible = true;
        }
        Ok(())
    }

    /// 保存草稿。失败时保持编辑状态，草稿不丢失。
    pub async fn save(&self, post_id: PostId) -> Result<Option<EditResponse>> {
        let draft = self
            .page
            .read()
            .post(post_id)
            .map(|card| card.draft().map(str::to_string));
        let draft = match draft {
            Some(Some(draft)) => draft,
            Some(None) => {
                let e = AppError::not_found(&format!("Edit field for post {}", post_id));
                return surface(self.notifier.as_ref(), "editing post", e);
            }
            None => {
                let e = AppError::not_found(&format!("Post card {}", post_id));
                return surface(self.notifier.as_ref(), "editing post", e);
            }
        };

        let request = EditRequest {
            text: draft.trim().to_string(),
        };
        if let Err(e) = request.validate() {
            return surface(self.notifier.as_ref(), "editing post", AppError::from(e));
        }

        let _busy = match InFlight::acquire(&self.page, ControlId::Save(post_id)) {
            Ok(Some(guard)) => guard,
            Ok(None) => return Ok(None),
            Err(e) => return surface(self.notifier.as_ref(), "editing post", e),
        };

        let response = match self.api.edit(post_id, &request).await {
            Ok(response) => response,
            Err(e) => return surface(self.notifier.as_ref(), "editing post", e),
        };

        {
            let mut page = self.page.write();
            let card = match page.post_mut(post_id) {
                Ok(card) => card,
                Err(e) => return surface(self.notifier.as_ref(), "editing post", e),
            };
            card.text = response.new_text.clone();
            card.edited = response.was_edited;
            card.mode = EditMode::Display;
            if let Some(edit) = card.edit.as_mut() {
                edit.post_text = response.new_text.clone();
                edit.visible = true;
            }
        }

        info!("Post {} saved (was_edited={})", post_id, response.was_edited);
        Ok(Some(response))
    }
}
