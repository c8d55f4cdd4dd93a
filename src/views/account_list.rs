//! Account table with inline delete and a toggleable creation form.
//!
//! Fetches are epoch-stamped the same way the contact list stamps its
//! requests: a refresh issued while an older fetch is in flight wins, and the
//! older response is dropped on arrival.

use crate::domain::account::Account;
use crate::domain::types::RecordId;
use crate::forms::Notice;
use crate::gateway::errors::GatewayResult;
use crate::gateway::{AccountReader, AccountWriter};

/// One outstanding account-list fetch.
#[derive(Clone, Copy, Debug)]
pub struct AccountFetch {
    pub snapshot: u64,
}

pub struct AccountListModel {
    accounts: Vec<Account>,
    show_form: bool,
    snapshot: u64,
    pending: bool,
    notice: Option<Notice>,
}

impl AccountListModel {
    /// Creates the model with the initial fetch already scheduled.
    pub fn new() -> Self {
        let mut model = Self {
            accounts: Vec::new(),
            show_form: false,
            snapshot: 0,
            pending: false,
            notice: None,
        };
        model.refresh();
        model
    }

    /// Schedules a reload of the account list.
    pub fn refresh(&mut self) {
        self.snapshot += 1;
        self.pending = true;
    }

    /// Hands the outstanding fetch to the host, if any.
    pub fn take_pending(&mut self) -> Option<AccountFetch> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(AccountFetch {
            snapshot: self.snapshot,
        })
    }

    /// Applies a fetch response. Stale responses are discarded; failures keep
    /// the prior rows on screen and only log.
    pub fn apply_accounts(&mut self, snapshot: u64, result: GatewayResult<Vec<Account>>) {
        if snapshot != self.snapshot {
            log::debug!("Discarding stale accounts response (snapshot {snapshot} != {})", self.snapshot);
            return;
        }
        match result {
            Ok(accounts) => self.accounts = accounts,
            Err(e) => log::error!("Failed to fetch accounts: {e}"),
        }
    }

    /// Deletes an account and reloads the list on success. On failure the
    /// list is untouched and an error notice is raised.
    pub fn delete_account<G>(&mut self, gateway: &G, id: &RecordId)
    where
        G: AccountWriter + ?Sized,
    {
        match gateway.delete_account(id) {
            Ok(()) => self.refresh(),
            Err(e) => {
                log::error!("Failed to delete account {id}: {e}");
                self.notice = Some(Notice::error(format!("Failed to delete account: {e}")));
            }
        }
    }

    pub fn show_create_form(&mut self) {
        self.show_form = true;
    }

    pub fn hide_create_form(&mut self) {
        self.show_form = false;
    }

    /// Called by the host after the embedded creation form reports success:
    /// hides the form and reloads the list.
    pub fn on_create_success(&mut self) {
        self.show_form = false;
        self.refresh();
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn form_visible(&self) -> bool {
        self.show_form
    }

    /// Hands the current notice to the UI exactly once.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn has_pending_fetch(&self) -> bool {
        self.pending
    }
}

impl Default for AccountListModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the model's outstanding fetch against `gateway`.
pub fn process_fetches<G>(model: &mut AccountListModel, gateway: &G)
where
    G: AccountReader + ?Sized,
{
    while let Some(fetch) = model.take_pending() {
        let result = gateway.fetch_accounts();
        model.apply_accounts(fetch.snapshot, result);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::forms::NoticeLevel;
    use crate::gateway::errors::GatewayError;

    fn account(id: &str, name: &str) -> Account {
        Account {
            id: RecordId::new(id).unwrap(),
            name: name.to_string(),
            phone: None,
            annual_revenue: None,
        }
    }

    /// Writer that records deletions and can be told to fail.
    #[derive(Default)]
    struct FakeWriter {
        fail: bool,
        deleted: RefCell<Vec<RecordId>>,
    }

    impl AccountWriter for FakeWriter {
        fn create_account(&self, _draft: &crate::domain::account::NewAccount) -> GatewayResult<()> {
            Ok(())
        }

        fn delete_account(&self, id: &RecordId) -> GatewayResult<()> {
            if self.fail {
                return Err(GatewayError::NotFound);
            }
            self.deleted.borrow_mut().push(id.clone());
            Ok(())
        }
    }

    #[test]
    fn mount_schedules_fetch() {
        let mut model = AccountListModel::new();
        assert!(model.take_pending().is_some());
        assert!(model.take_pending().is_none());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut model = AccountListModel::new();
        let stale = model.take_pending().unwrap();

        model.refresh();
        model.apply_accounts(stale.snapshot, Ok(vec![account("001a", "Stale Corp")]));
        assert!(model.accounts().is_empty());

        let current = model.take_pending().unwrap();
        model.apply_accounts(current.snapshot, Ok(vec![account("001b", "Fresh Corp")]));
        assert_eq!(model.accounts()[0].name, "Fresh Corp");
    }

    #[test]
    fn fetch_failure_keeps_prior_rows() {
        let mut model = AccountListModel::new();
        let fetch = model.take_pending().unwrap();
        model.apply_accounts(fetch.snapshot, Ok(vec![account("001a", "Acme")]));

        model.refresh();
        let retry = model.take_pending().unwrap();
        model.apply_accounts(
            retry.snapshot,
            Err(GatewayError::Transport("gateway down".to_string())),
        );
        assert_eq!(model.accounts().len(), 1);
    }

    #[test]
    fn delete_success_refreshes() {
        let mut model = AccountListModel::new();
        model.take_pending();

        let writer = FakeWriter::default();
        let id = RecordId::new("001a").unwrap();
        model.delete_account(&writer, &id);

        assert_eq!(writer.deleted.borrow().len(), 1);
        assert!(model.has_pending_fetch());
        assert!(model.take_notice().is_none());
    }

    #[test]
    fn delete_failure_raises_notice_and_keeps_list() {
        let mut model = AccountListModel::new();
        let fetch = model.take_pending().unwrap();
        model.apply_accounts(fetch.snapshot, Ok(vec![account("001a", "Acme")]));

        let writer = FakeWriter {
            fail: true,
            ..FakeWriter::default()
        };
        model.delete_account(&writer, &RecordId::new("001a").unwrap());

        assert!(!model.has_pending_fetch());
        assert_eq!(model.accounts().len(), 1);
        let notice = model.take_notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(model.take_notice().is_none());
    }

    #[test]
    fn create_success_hides_form_and_refreshes() {
        let mut model = AccountListModel::new();
        model.take_pending();
        model.show_create_form();
        assert!(model.form_visible());

        model.on_create_success();
        assert!(!model.form_visible());
        assert!(model.has_pending_fetch());
    }
}
