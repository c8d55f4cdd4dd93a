//! List view-models binding UI state to gateway fetches.

pub mod account_list;
pub mod contact_list;
