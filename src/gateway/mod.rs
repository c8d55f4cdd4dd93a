//! Abstraction over the remote data controller layer.
//!
//! Every operation is a request/response call that either returns data or a
//! [`GatewayError`]; queries are built with the same builder style the rest
//! of the crate uses. Contact pages arrive as a serialized JSON document and
//! are decoded by the consumer — the one decode step in the pipeline.

use crate::domain::account::{Account, NewAccount};
use crate::domain::contact::NewContact;
use crate::domain::types::{RecordId, SortOrder};
use crate::gateway::errors::GatewayResult;

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Filter dimension applied to contact queries. An empty `field` means no
/// filtering; the value is interpreted by the gateway, not by this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    pub field: String,
    pub value: String,
}

/// Parameters for one page-of-contacts fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactQuery {
    pub page_number: usize,
    pub page_size: usize,
    /// Gateway field name to sort by; empty string selects the gateway's
    /// default order.
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub filter: ContactFilter,
}

impl ContactQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_number: 1,
            page_size,
            sort_field: String::new(),
            sort_order: SortOrder::default(),
            filter: ContactFilter::default(),
        }
    }

    pub fn page(mut self, page_number: usize) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_field = field.into();
        self.sort_order = order;
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter = ContactFilter {
            field: field.into(),
            value: value.into(),
        };
        self
    }
}

impl Default for ContactQuery {
    fn default() -> Self {
        Self::new(crate::DEFAULT_PAGE_SIZE)
    }
}

pub trait AccountReader {
    /// Fetches all accounts visible to the session.
    fn fetch_accounts(&self) -> GatewayResult<Vec<Account>>;
}

pub trait AccountWriter {
    fn create_account(&self, draft: &NewAccount) -> GatewayResult<()>;
    fn delete_account(&self, id: &RecordId) -> GatewayResult<()>;
}

pub trait ContactReader {
    /// Fetches one page of contacts as a serialized JSON document
    /// (`Vec<Contact>` on the wire).
    fn fetch_contacts_page(&self, query: &ContactQuery) -> GatewayResult<String>;

    /// Total number of contacts matching the filter.
    fn fetch_contacts_count(&self, filter: &ContactFilter) -> GatewayResult<u64>;
}

pub trait ContactWriter {
    fn create_contact(&self, draft: &NewContact) -> GatewayResult<()>;
}
