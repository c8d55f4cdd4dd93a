//! Paginated, sortable, filterable contact list.
//!
//! The model is a pure state machine: user-interaction handlers mutate the
//! query parameters and record which fetches became necessary; a host drains
//! those with [`ContactListModel::take_pending`], runs them against a
//! [`ContactReader`], and feeds the responses back through the `apply_*`
//! methods (or lets [`process_fetches`] do the whole cycle). Every request is
//! stamped with the parameter snapshot it was issued for, so a response that
//! arrives after the parameters moved on is discarded instead of clobbering
//! newer state.

use crate::bus::{MessageBus, Subscription};
use crate::domain::contact::Contact;
use crate::domain::messages::ContactAdded;
use crate::domain::types::SortOrder;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::{ContactQuery, ContactReader};
use crate::pagination;

/// Distinct gateway operations the list depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    Page,
    Count,
}

/// One outstanding fetch, stamped with the parameters it was issued for.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub snapshot: u64,
    pub kind: FetchKind,
    pub query: ContactQuery,
}

/// View-model for the contact table with pager, sort selector, and filter
/// controls. Construct with [`ContactListModel::with_refresh`] to also
/// refetch whenever a contact is created elsewhere in the session.
pub struct ContactListModel {
    query: ContactQuery,
    snapshot: u64,
    contacts: Vec<Contact>,
    total_records: u64,
    total_pages: usize,
    pending: Vec<FetchKind>,
    subscription: Option<Subscription<ContactAdded>>,
}

impl ContactListModel {
    /// Creates the model with default parameters and both initial fetches
    /// already scheduled.
    pub fn new() -> Self {
        Self::with_query(ContactQuery::default())
    }

    pub fn with_query(query: ContactQuery) -> Self {
        let mut model = Self {
            query,
            snapshot: 0,
            contacts: Vec::new(),
            total_records: 0,
            total_pages: 0,
            pending: Vec::new(),
            subscription: None,
        };
        model.refresh();
        model
    }

    /// Subscribes the list to contact-created announcements. At most one
    /// subscription per instance; released when the model is dropped.
    pub fn with_refresh(mut self, bus: &MessageBus<ContactAdded>) -> Self {
        self.subscription = Some(bus.subscribe());
        self
    }

    /// Jumps to page `n`. No-op for `n == 0` and for the current page.
    pub fn set_page(&mut self, n: usize) {
        if n == 0 || n == self.query.page_number {
            return;
        }
        self.query.page_number = n;
        self.schedule(&[FetchKind::Page]);
    }

    /// Steps back one page; no-op on the first page.
    pub fn previous_page(&mut self) {
        if self.query.page_number > 1 {
            self.query.page_number -= 1;
            self.schedule(&[FetchKind::Page]);
        }
    }

    /// Steps forward one page; no-op on the last page.
    pub fn next_page(&mut self) {
        if self.query.page_number < self.total_pages {
            self.query.page_number += 1;
            self.schedule(&[FetchKind::Page]);
        }
    }

    /// Replaces sort field and order together, so no fetch can observe a
    /// half-updated pair.
    pub fn set_sort(&mut self, field: impl Into<String>, order: SortOrder) {
        self.query.sort_field = field.into();
        self.query.sort_order = order;
        self.schedule(&[FetchKind::Page]);
    }

    /// Parses a combined `"Field ORDER"` selector value, e.g. `"Name ASC"`.
    /// Malformed selections are logged and ignored.
    pub fn set_sort_selection(&mut self, selection: &str) {
        let parsed = selection
            .split_once(' ')
            .and_then(|(field, order)| order.parse::<SortOrder>().ok().map(|o| (field, o)));
        match parsed {
            Some((field, order)) => self.set_sort(field, order),
            None => log::warn!("Ignoring malformed sort selection: {selection:?}"),
        }
    }

    /// Switches the filter dimension. The filter value is always cleared so a
    /// stale value can never be applied against the new dimension.
    pub fn set_filter_field(&mut self, field: impl Into<String>) {
        self.query.filter.field = field.into();
        self.query.filter.value.clear();
        self.schedule(&[FetchKind::Page, FetchKind::Count]);
    }

    pub fn set_filter_value(&mut self, value: impl Into<String>) {
        self.query.filter.value = value.into();
        self.schedule(&[FetchKind::Page, FetchKind::Count]);
    }

    /// Schedules both fetches with the currently-held parameters, bypassing
    /// the parameter-change triggers (mount and bus-refresh path).
    pub fn refresh(&mut self) {
        self.schedule(&[FetchKind::Page, FetchKind::Count]);
    }

    /// Drains any bus messages and refreshes once if a contact was created.
    pub fn poll_messages(&mut self) {
        let created = match &self.subscription {
            Some(sub) => sub.try_iter().any(|msg| msg.contact_created),
            None => false,
        };
        if created {
            self.refresh();
        }
    }

    /// Hands the outstanding fetches to the host, stamped with the current
    /// snapshot and a copy of the current parameters. At most one request per
    /// [`FetchKind`].
    pub fn take_pending(&mut self) -> Vec<FetchRequest> {
        let snapshot = self.snapshot;
        let query = self.query.clone();
        self.pending
            .drain(..)
            .map(|kind| FetchRequest {
                snapshot,
                kind,
                query: query.clone(),
            })
            .collect()
    }

    /// Applies a page-fetch response. Stale responses (parameters changed
    /// since the request was taken) are discarded; failures keep the prior
    /// records on screen and only log.
    pub fn apply_page(&mut self, snapshot: u64, result: GatewayResult<String>) {
        if snapshot != self.snapshot {
            log::debug!("Discarding stale contacts page (snapshot {snapshot} != {})", self.snapshot);
            return;
        }
        let decoded = result
            .and_then(|doc| serde_json::from_str::<Vec<Contact>>(&doc).map_err(GatewayError::from));
        match decoded {
            Ok(contacts) => self.contacts = contacts,
            Err(e) => log::error!("Failed to fetch contacts page: {e}"),
        }
    }

    /// Applies a count-fetch response and recomputes the pager. When the
    /// current page falls outside the new page range the model snaps back to
    /// page 1, scheduling one more page fetch.
    pub fn apply_count(&mut self, snapshot: u64, result: GatewayResult<u64>) {
        if snapshot != self.snapshot {
            log::debug!("Discarding stale contacts count (snapshot {snapshot} != {})", self.snapshot);
            return;
        }
        match result {
            Ok(count) => {
                self.total_records = count;
                self.total_pages = pagination::total_pages(count, self.query.page_size);
                if (self.total_pages == 0 || self.query.page_number > self.total_pages)
                    && self.query.page_number != 1
                {
                    self.query.page_number = 1;
                    self.schedule(&[FetchKind::Page]);
                }
            }
            Err(e) => log::error!("Failed to fetch contacts count: {e}"),
        }
    }

    fn schedule(&mut self, kinds: &[FetchKind]) {
        self.snapshot += 1;
        for kind in kinds {
            if !self.pending.contains(kind) {
                self.pending.push(*kind);
            }
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn query(&self) -> &ContactQuery {
        &self.query
    }

    pub fn page_number(&self) -> usize {
        self.query.page_number
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Pager page count; `0` while everything fits on one page.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Pager button numbers, empty when the pager is hidden.
    pub fn pages(&self) -> Vec<usize> {
        pagination::page_numbers(self.total_pages)
    }

    pub fn first_page_disabled(&self) -> bool {
        self.query.page_number == 1
    }

    pub fn last_page_disabled(&self) -> bool {
        self.query.page_number >= self.total_pages
    }

    /// Whether the pager button for `n` renders as the active page.
    pub fn is_current_page(&self, n: usize) -> bool {
        self.query.page_number == n
    }

    pub fn has_pending_fetches(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl Default for ContactListModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the model's outstanding fetches against `gateway` until the parameter
/// set settles. A count response that snaps the page back to 1 schedules one
/// more page fetch, which the loop picks up.
pub fn process_fetches<G>(model: &mut ContactListModel, gateway: &G)
where
    G: ContactReader + ?Sized,
{
    loop {
        let requests = model.take_pending();
        if requests.is_empty() {
            break;
        }
        for request in requests {
            match request.kind {
                FetchKind::Page => {
                    let result = gateway.fetch_contacts_page(&request.query);
                    model.apply_page(request.snapshot, result);
                }
                FetchKind::Count => {
                    let result = gateway.fetch_contacts_count(&request.query.filter);
                    model.apply_count(request.snapshot, result);
                }
            }
        }
    }
}
