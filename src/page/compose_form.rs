use serde::Serialize;

pub const SUBMIT_LABEL: &str = "Post";
pub const SUBMIT_BUSY_LABEL: &str = "Posting...";

/// 发帖表单
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComposeForm {
    pub expanded: bool,
    pub text: String,
    pub busy: bool,
}

impl ComposeForm {
    /// 展开/收起；返回新的展开状态
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_label() {
        let mut form = ComposeForm::default();
        assert!(form.toggle());
        assert!(!form.toggle());

        assert_eq!(form.submit_label(), "Post");
        form.busy = true;
        assert_eq!(form.submit_label(), "Posting...");
    }
}
