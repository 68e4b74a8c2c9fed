use std::sync::Arc;

use crate::{
    config::Config,
    error::Result,
    models::PageSnapshot,
    page::{new_page, Page, PageState},
    services::{
        ApiClient, ComposeService, EditService, FollowService, LikeService, Notifier,
    },
};

/// 客户端的共享状态
/// 包含配置、页面状态以及四个交互服务
#[derive(Clone)]
pub struct AppState {
    /// 应用配置
    pub config: Config,

    /// HTTP 客户端
    pub api: ApiClient,

    /// 页面视图状态
    pub page: Page,

    /// 提示框
    pub notifier: Arc<dyn Notifier>,

    /// 发帖
    pub compose_service: ComposeService,

    /// 点赞
    pub like_service: LikeService,

    /// 编辑
    pub edit_service: EditService,

    /// 关注
    pub follow_service: FollowService,
}

impl AppState {
    pub fn new(config: Config, snapshot: PageSnapshot, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        let page = new_page(PageState::from_snapshot(snapshot));

        Ok(Self {
            compose_service: ComposeService::new(api.clone(), page.clone(), notifier.clone()),
            like_service: LikeService::new(api.clone(), page.clone(), notifier.clone()),
            edit_service: EditService::new(api.clone(), page.clone(), notifier.clone()),
            follow_service: FollowService::new(api.clone(), page.clone(), notifier.clone()),
            config,
            api,
            page,
            notifier,
        })
    }

    /// 当前页面的快照（最近一次服务端确认的状态）
    pub fn snapshot(&self) -> PageSnapshot {
        self.page.read().snapshot()
    }
}
