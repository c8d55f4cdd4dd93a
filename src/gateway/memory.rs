//! In-memory reference gateway.
//!
//! Stands in for the remote controller layer in tests and demos: it owns the
//! record store and the query semantics (filter, sort, paginate, count) that
//! production deployments run server-side. Filter matching is
//! case-insensitive substring, except `IsSpecial` which compares boolean
//! equality.

use std::cmp::Ordering;
use std::sync::Mutex;

use chrono::Utc;

use crate::domain::account::{Account, NewAccount};
use crate::domain::contact::{Contact, NewContact};
use crate::domain::types::{RecordId, SortOrder};
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::{AccountReader, AccountWriter, ContactFilter, ContactQuery, ContactReader, ContactWriter};

#[derive(Default)]
struct Store {
    accounts: Vec<Account>,
    contacts: Vec<Contact>,
    next_id: u64,
}

/// Thread-safe in-memory implementation of all gateway traits.
#[derive(Default)]
pub struct InMemoryGateway {
    store: Mutex<Store>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing records, bypassing creation rules.
    pub fn seed(accounts: Vec<Account>, contacts: Vec<Contact>) -> Self {
        Self {
            store: Mutex::new(Store {
                accounts,
                contacts,
                next_id: 1000,
            }),
        }
    }

    fn lock(&self) -> GatewayResult<std::sync::MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|e| GatewayError::Transport(format!("gateway store poisoned: {e}")))
    }
}

fn matches_filter(contact: &Contact, filter: &ContactFilter) -> GatewayResult<bool> {
    if filter.field.is_empty() || filter.value.is_empty() {
        return Ok(true);
    }
    let needle = filter.value.to_lowercase();
    let contains = |field: Option<&str>| {
        field
            .map(|v| v.to_lowercase().contains(&needle))
            .unwrap_or(false)
    };
    match filter.field.as_str() {
        "Name" => Ok(contains(Some(contact.name.as_str()))),
        "Phone" => Ok(contains(contact.phone.as_deref())),
        "Email" => Ok(contains(contact.email.as_deref())),
        "Account.Name" => Ok(contains(contact.account_name.as_deref())),
        "IsSpecial" => {
            let wanted = filter
                .value
                .parse::<bool>()
                .map_err(|_| GatewayError::Rejected(format!("bad boolean: {}", filter.value)))?;
            Ok(contact.is_special == wanted)
        }
        other => Err(GatewayError::Rejected(format!(
            "unknown filter field: {other}"
        ))),
    }
}

fn compare_by(field: &str, a: &Contact, b: &Contact) -> GatewayResult<Ordering> {
    let ordering = match field {
        "Name" => a.name.cmp(&b.name),
        "Phone" => a.phone.cmp(&b.phone),
        "Email" => a.email.cmp(&b.email),
        "CreatedDate" => a.created_date.cmp(&b.created_date),
        "Account.Name" => a.account_name.cmp(&b.account_name),
        other => {
            return Err(GatewayError::Rejected(format!(
                "unknown sort field: {other}"
            )));
        }
    };
    Ok(ordering)
}

impl ContactReader for InMemoryGateway {
    fn fetch_contacts_page(&self, query: &ContactQuery) -> GatewayResult<String> {
        if query.page_number == 0 || query.page_size == 0 {
            return Err(GatewayError::Rejected("invalid pagination".to_string()));
        }
        let store = self.lock()?;

        let mut matched = Vec::new();
        for contact in &store.contacts {
            if matches_filter(contact, &query.filter)? {
                matched.push(contact.clone());
            }
        }

        if !query.sort_field.is_empty() {
            // Surface a bad sort field before sorting rather than mid-sort.
            if let Some(first) = matched.first() {
                compare_by(&query.sort_field, first, first)?;
            }
            matched.sort_by(|a, b| {
                compare_by(&query.sort_field, a, b).unwrap_or(Ordering::Equal)
            });
            if query.sort_order == SortOrder::Desc {
                matched.reverse();
            }
        }

        let start = (query.page_number - 1) * query.page_size;
        let page: Vec<Contact> = matched
            .into_iter()
            .skip(start)
            .take(query.page_size)
            .collect();

        Ok(serde_json::to_string(&page)?)
    }

    fn fetch_contacts_count(&self, filter: &ContactFilter) -> GatewayResult<u64> {
        let store = self.lock()?;
        let mut count = 0u64;
        for contact in &store.contacts {
            if matches_filter(contact, filter)? {
                count += 1;
            }
        }
        Ok(count)
    }
}

impl ContactWriter for InMemoryGateway {
    fn create_contact(&self, draft: &NewContact) -> GatewayResult<()> {
        let mut store = self.lock()?;

        let last_name = draft
            .last_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GatewayError::Rejected("last name is required".to_string()))?;

        let account_name = match &draft.account_id {
            Some(account_id) => Some(
                store
                    .accounts
                    .iter()
                    .find(|a| &a.id == account_id)
                    .map(|a| a.name.clone())
                    .ok_or(GatewayError::NotFound)?,
            ),
            None => None,
        };

        store.next_id += 1;
        let id = RecordId::new(format!("003{:09}", store.next_id))
            .map_err(|e| GatewayError::Rejected(e.to_string()))?;
        let name = match draft.first_name.as_deref().map(str::trim) {
            Some(first) if !first.is_empty() => format!("{first} {last_name}"),
            _ => last_name.to_string(),
        };

        store.contacts.push(Contact {
            id,
            name,
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            created_date: Utc::now().naive_utc(),
            account_name,
            is_special: false,
        });
        Ok(())
    }
}

impl AccountReader for InMemoryGateway {
    fn fetch_accounts(&self) -> GatewayResult<Vec<Account>> {
        Ok(self.lock()?.accounts.clone())
    }
}

impl AccountWriter for InMemoryGateway {
    fn create_account(&self, draft: &NewAccount) -> GatewayResult<()> {
        let mut store = self.lock()?;

        let name = draft.name.trim();
        if name.is_empty() {
            return Err(GatewayError::Rejected("account name is required".to_string()));
        }
        let annual_revenue = match draft.annual_revenue.trim() {
            "" => None,
            raw => Some(raw.parse::<f64>().map_err(|_| {
                GatewayError::Rejected(format!("bad annual revenue: {raw}"))
            })?),
        };

        store.next_id += 1;
        let id = RecordId::new(format!("001{:09}", store.next_id))
            .map_err(|e| GatewayError::Rejected(e.to_string()))?;
        store.accounts.push(Account {
            id,
            name: name.to_string(),
            phone: Some(draft.phone.clone()).filter(|p| !p.is_empty()),
            annual_revenue,
        });
        Ok(())
    }

    fn delete_account(&self, id: &RecordId) -> GatewayResult<()> {
        let mut store = self.lock()?;
        let before = store.accounts.len();
        store.accounts.retain(|a| &a.id != id);
        if store.accounts.len() == before {
            return Err(GatewayError::NotFound);
        }
        Ok(())
    }
}
