pub mod follow;
pub mod snapshot;
pub mod post;
pub mod response;

pub use follow::*;
pub use snapshot::*;
pub use post::*;
pub use response::decode_reply;
