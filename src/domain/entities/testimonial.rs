use chrono::NaiveDateTime;
use uuid::Uuid;

use super::record_status::RecordStatus;

#[derive(Debug, Clone)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub rating: i16,
    pub text: String,
    pub plan_name: String,
    pub email: Option<String>,
    /// Set by a moderator only; submissions always start unapproved.
    pub is_approved: bool,
    pub status: RecordStatus,
    pub created_at: NaiveDateTime,
}

impl Testimonial {
    pub fn is_published(&self) -> bool {
        self.is_approved && self.status.is_active()
    }
}

#[derive(Debug, Clone)]
pub struct NewTestimonial {
    pub name: String,
    pub location: String,
    pub rating: i16,
    pub text: String,
    pub plan_name: String,
    pub email: Option<String>,
    pub is_approved: bool,
}
