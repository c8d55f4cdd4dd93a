//! View-model layer for a CRM front end: paginated, sortable, filterable
//! contact and account lists, record-creation forms, and the in-process
//! message bus that lets them refresh each other without direct coupling.
//!
//! All business logic (query execution, validation, persistence) lives behind
//! the [`gateway`] traits; this crate binds UI state to those calls and
//! recomputes derived state from the responses.

pub mod bus;
pub mod domain;
pub mod forms;
pub mod gateway;
pub mod pagination;
pub mod views;

/// Default number of records shown per list page.
pub const DEFAULT_PAGE_SIZE: usize = 3;
