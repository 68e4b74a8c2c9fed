use tracing::debug;

use crate::error::Result;
use crate::page::{ControlId, Page};

/// 控件级的"请求进行中"守卫。
///
/// 获取时把控件置为禁用；无论请求成功、失败还是 panic，drop 时都会恢复可用。
pub struct InFlight {
    page: Page,
    control: ControlId,
}

impl InFlight {
    /// 控件已在请求中（或不可用）时返回 `None`，调用方不应再发请求
    pub fn acquire(page: &Page, control: ControlId) -> Result<Option<Self>> {
        let acquired = page.write().try_mark_busy(&control)?;
        if !acquired {
            debug!("Control {} is disabled, ignoring activation", control);
            return Ok(None);
        }
        Ok(Some(Self {
            page: page.clone(),
            control,
        }))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.page.write().clear_busy(&self.control);
    }
}
