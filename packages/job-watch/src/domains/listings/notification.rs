use super::models::job_record::JobRecord;
use crate::common::utils::truncate_with_ellipsis;
use crate::kernel::BaseNotifier;

/// Longest summary excerpt included in a message.
pub const SUMMARY_MAX_CHARS: usize = 400;

/// Render the chat message for one posting.
pub fn format_job_message(job: &JobRecord) -> String {
    let mut lines = vec![
        format!("🔔 {}", job.title),
        format!("🏢 {} — 📍 {}", job.company, job.location),
    ];

    if let Some(contract) = &job.contract {
        lines.push(format!("🧾 Contrat: {}", contract));
    }

    lines.push(job.link.clone());

    if !job.summary.is_empty() {
        lines.push(String::new());
        lines.push(truncate_with_ellipsis(&job.summary, SUMMARY_MAX_CHARS));
    }

    lines.join("\n")
}

/// Send one posting. Returns whether it was delivered.
///
/// Failures are logged and swallowed: there is no retry, and the posting
/// stays marked as seen.
pub async fn notify_job(notifier: &dyn BaseNotifier, job: &JobRecord) -> bool {
    let message = format_job_message(job);

    match notifier.send_message(&message).await {
        Ok(()) => {
            tracing::info!(title = %job.title, id = %job.id, "Notification sent");
            true
        }
        Err(e) => {
            tracing::warn!(title = %job.title, id = %job.id, error = %format!("{e:#}"), "Notification failed");
            false
        }
    }
}
