use serde::{Deserialize, Serialize};

use super::{FollowView, PostView};

/// 服务端渲染页面的初始状态
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// 当前登录用户
    #[serde(default)]
    pub viewer: Option<String>,
    /// 按时间倒序
    #[serde(default)]
    pub posts: Vec<PostView>,
    #[serde(default)]
    pub profile: Option<FollowView>,
}
