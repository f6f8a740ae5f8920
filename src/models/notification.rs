use serde::Serialize;

/// Payload handed to the notification collaborator on submission.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub timesheet_id: i64,
    pub user_email: String,
    pub user_name: String,
    pub month: u32,
    pub year: i32,
    pub total_hours: f64,
    pub total_overtime: f64,
}
