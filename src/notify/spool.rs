use crate::errors::{AppError, AppResult};
use crate::models::notification::NotificationRequest;
use crate::notify::{Notifier, render_message};
use std::fs;
use std::path::PathBuf;

/// Drops rendered messages as `.eml` files into a spool directory, from
/// which a mail relay picks them up.
#[derive(Debug, Clone)]
pub struct SpoolNotifier {
    pub dir: PathBuf,
    pub from: String,
    pub to: String,
}

impl SpoolNotifier {
    pub fn new(dir: impl Into<PathBuf>, from: &str, to: &str) -> Self {
        Self {
            dir: dir.into(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn file_for(&self, request: &NotificationRequest) -> PathBuf {
        self.dir.join(format!(
            "timesheet-{}-{:04}-{:02}.eml",
            request.timesheet_id, request.year, request.month
        ))
    }
}

impl Notifier for SpoolNotifier {
    fn notify(&self, request: &NotificationRequest) -> AppResult<()> {
        let msg = render_message(request, &self.from, &self.to);
        let path = self.file_for(request);

        // machine-readable copy for the relay, on a single header line
        let payload = serde_json::to_string(request)
            .map_err(|e| AppError::Notification(format!("payload: {}", e)))?;
        let eml = format!("X-Timesheet-Request: {}\r\n{}", payload, msg.to_eml());

        fs::create_dir_all(&self.dir)
            .and_then(|_| fs::write(&path, eml))
            .map_err(|e| AppError::Notification(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn request() -> NotificationRequest {
        NotificationRequest {
            timesheet_id: 3,
            user_email: "u@example.com".into(),
            user_name: "User".into(),
            month: 2,
            year: 2026,
            total_hours: 10.0,
            total_overtime: 0.0,
        }
    }

    #[test]
    fn writes_eml_into_spool() {
        let dir = env::temp_dir().join("rtimesheet_spool_unit");
        fs::remove_dir_all(&dir).ok();

        let n = SpoolNotifier::new(&dir, "a@example.com", "b@example.com");
        n.notify(&request()).unwrap();

        let content = fs::read_to_string(dir.join("timesheet-3-2026-02.eml")).unwrap();
        assert!(content.contains("Subject: Timesheet - User - February 2026"));
        assert!(content.starts_with("X-Timesheet-Request: {\"timesheetId\":3,"));
    }

    #[test]
    fn unwritable_spool_is_a_notification_error() {
        let blocker = env::temp_dir().join("rtimesheet_spool_blocker");
        fs::remove_dir_all(&blocker).ok();
        fs::write(&blocker, b"not a dir").unwrap();

        let n = SpoolNotifier::new(blocker.join("inner"), "a@example.com", "b@example.com");
        assert!(matches!(n.notify(&request()), Err(AppError::Notification(_))));
    }
}
