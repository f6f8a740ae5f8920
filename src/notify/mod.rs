//! Outbound notification collaborator used on timesheet submission.

pub mod spool;

use crate::errors::AppResult;
use crate::models::notification::NotificationRequest;
use crate::utils::formatting::month_name;

pub use spool::SpoolNotifier;

/// Delivers a submission notice. An `Err` means the notice was NOT handed
/// over, and the submission must not be committed.
pub trait Notifier {
    fn notify(&self, request: &NotificationRequest) -> AppResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailMessage {
    /// Plain RFC 5322-style text (headers, blank line, body).
    pub fn to_eml(&self) -> String {
        format!(
            "From: {}\r\nTo: {}\r\nSubject: {}\r\nContent-Type: text/plain; charset=utf-8\r\n\r\n{}",
            self.from,
            self.to,
            self.subject,
            self.body.replace('\n', "\r\n")
        )
    }
}

/// Render the HR notice for a submitted timesheet.
pub fn render_message(request: &NotificationRequest, from: &str, to: &str) -> MailMessage {
    let period = format!("{} {}", month_name(request.month), request.year);

    let body = format!(
        "Timesheet submitted\n\
         \n\
         Employee\n\
         Name:   {name}\n\
         Email:  {email}\n\
         Period: {period}\n\
         \n\
         Hours summary\n\
         Total hours: {hours:.2}h\n\
         Overtime:    {overtime:.2}h\n\
         \n\
         Timesheet reference: #{id}\n",
        name = request.user_name,
        email = request.user_email,
        period = period,
        hours = request.total_hours,
        overtime = request.total_overtime,
        id = request.timesheet_id,
    );

    MailMessage {
        from: from.to_string(),
        to: to.to_string(),
        subject: format!("Timesheet - {} - {}", request.user_name, period),
        body,
    }
}
