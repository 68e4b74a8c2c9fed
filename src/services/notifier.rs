use parking_lot::Mutex;
use tracing::{debug, error};

use crate::error::{AppError, Result};

/// 阻塞式提示框（浏览器中的 `alert`）
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// 命令行下输出到 stderr
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// 记录所有提示，供嵌入方读取
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().push(message.to_string());
    }
}

/// 展示错误：业务错误原样提示，其余记录日志后给出通用提示
pub fn report(notifier: &dyn Notifier, context: &str, err: &AppError) {
    match err {
        AppError::Application(_) | AppError::Validation(_) | AppError::ValidatorError(_) => {
            debug!("Rejected while {}: {}", context, err);
        }
        _ => error!("Error {}: {}", context, err),
    }
    notifier.alert(&err.user_message());
}

/// `report` 之后原样返回错误
pub fn surface<T>(notifier: &dyn Notifier, context: &str, err: AppError) -> Result<T> {
    report(notifier, context, &err);
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_FAILURE;

    #[test]
    fn test_report_messages() {
        let notifier = RecordingNotifier::new();
        report(&notifier, "liking post", &AppError::Application("Nope.".to_string()));
        report(&notifier, "liking post", &AppError::Parse("bad body".to_string()));

        assert_eq!(notifier.alerts(), vec!["Nope.".to_string(), GENERIC_FAILURE.to_string()]);
    }
}
