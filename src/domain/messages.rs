//! Message schemas carried by the in-process bus.

use serde::{Deserialize, Serialize};

/// Announces that a contact record was created somewhere in the session.
/// Ephemeral: delivered to currently-live subscribers only, never persisted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactAdded {
    pub contact_created: bool,
}
