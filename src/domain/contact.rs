use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::RecordId;

/// Contact record as decoded from the gateway's serialized page document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_date: NaiveDateTime,
    /// Name of the parent account, when one is linked.
    pub account_name: Option<String>,
    #[serde(default)]
    pub is_special: bool,
}

/// Draft for a contact-creation form. Every field is optional until the
/// gateway validates the submit; this layer never rejects a draft itself.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub account_id: Option<RecordId>,
}

impl NewContact {
    /// True when no field has been touched yet.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.account_id.is_none()
    }
}
