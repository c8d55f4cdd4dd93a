//! Domain entities returned by the remote gateway and the drafts sent to it.

pub mod account;
pub mod contact;
pub mod messages;
pub mod types;
