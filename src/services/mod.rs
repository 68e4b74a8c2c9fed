pub mod api;
pub mod compose;
pub mod edit;
pub mod follow;
pub mod like;
pub mod notifier;

// 重新导出常用类型
pub use api::ApiClient;
pub use compose::ComposeService;
pub use edit::EditService;
pub use follow::FollowService;
pub use like::LikeService;
pub use notifier::{ConsoleNotifier, Notifier, RecordingNotifier};
