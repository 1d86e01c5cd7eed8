//! Contact submission queries.

use haven_core::result::AppResult;
use haven_entity::contact::ContactSubmission;

use super::ContactRepository;

impl ContactRepository {
    /// Fetch a submission and flag it as read.
    pub async fn mark_read(&self, id: &str) -> AppResult<Option<ContactSubmission>> {
        Ok(self.modify(id, |contact| contact.is_read = true))
    }

    /// Number of submissions nobody has opened yet.
    pub async fn unread_count(&self) -> AppResult<u64> {
        Ok(self.count_where(|c| !c.is_read))
    }

    /// The `limit` most recent submissions.
    pub async fn recent(&self, limit: usize) -> AppResult<Vec<ContactSubmission>> {
        Ok(self.all().into_iter().take(limit).collect())
    }
}
