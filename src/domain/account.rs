use serde::{Deserialize, Serialize};

use crate::domain::types::RecordId;

/// Account record as returned by the gateway.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: RecordId,
    pub name: String,
    pub phone: Option<String>,
    pub annual_revenue: Option<f64>,
}

/// Draft for an account-creation form. Values are kept as entered; the
/// gateway owns validation and type coercion.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub phone: String,
    pub annual_revenue: String,
}

impl NewAccount {
    /// True when no field has been touched yet.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.annual_revenue.is_empty()
    }
}
