//! Record-creation form view-models.
//!
//! Forms collect a draft, submit it through a gateway writer, and surface the
//! outcome as a transient [`Notice`]. No validation happens in this layer; a
//! malformed draft is forwarded as-is and comes back as a gateway rejection.

pub mod account;
pub mod contact;

/// Severity of a transient user-facing notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One-shot notification shown after a submit or delete. Consumed by the UI
/// via the owning model's `take_notice`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}
