//! Contact-creation form.

use crate::bus::MessageBus;
use crate::domain::account::Account;
use crate::domain::contact::NewContact;
use crate::domain::messages::ContactAdded;
use crate::domain::types::RecordId;
use crate::gateway::errors::GatewayResult;
use crate::gateway::{AccountReader, ContactWriter};

/// Picklist entry for the parent-account selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountOption {
    pub value: RecordId,
    pub label: String,
}

/// View-model for the new-contact form: a mutable draft, the account
/// picklist, and the submit flow that announces success on the bus.
#[derive(Default)]
pub struct ContactFormModel {
    draft: NewContact,
    account_options: Vec<AccountOption>,
    notice: Option<super::Notice>,
}

impl ContactFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the account picklist from the gateway. On failure the
    /// current options are kept and the error is logged.
    pub fn load_accounts<G>(&mut self, gateway: &G)
    where
        G: AccountReader + ?Sized,
    {
        match gateway.fetch_accounts() {
            Ok(accounts) => {
                self.account_options = accounts.into_iter().map(AccountOption::from).collect();
            }
            Err(e) => log::error!("Failed to fetch account options: {e}"),
        }
    }

    /// Sets a draft field by its wire name. Unknown names are logged and
    /// ignored; nothing is validated here.
    pub fn set_field(&mut self, name: &str, value: &str) {
        let slot = match name {
            "firstName" => &mut self.draft.first_name,
            "lastName" => &mut self.draft.last_name,
            "phone" => &mut self.draft.phone,
            "email" => &mut self.draft.email,
            other => {
                log::warn!("Ignoring unknown contact form field: {other:?}");
                return;
            }
        };
        *slot = Some(value.to_string());
    }

    /// Sets the parent account from the picklist; `None` clears it.
    pub fn select_account(&mut self, account_id: Option<RecordId>) {
        self.draft.account_id = account_id;
    }

    /// Submits the draft. On success: success notice, `ContactAdded`
    /// published for every live subscriber, draft cleared. On failure: error
    /// notice, draft retained so the user can retry without re-entering data.
    pub fn submit<G>(&mut self, gateway: &G, bus: &MessageBus<ContactAdded>) -> GatewayResult<()>
    where
        G: ContactWriter + ?Sized,
    {
        match gateway.create_contact(&self.draft) {
            Ok(()) => {
                self.notice = Some(super::Notice::success("Contact created"));
                bus.publish(ContactAdded {
                    contact_created: true,
                });
                self.clear();
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to create contact: {e}");
                self.notice = Some(super::Notice::error(format!("Failed to create contact: {e}")));
                Err(e)
            }
        }
    }

    /// Resets every draft field (explicit cancel path).
    pub fn clear(&mut self) {
        self.draft = NewContact::default();
    }

    pub fn draft(&self) -> &NewContact {
        &self.draft
    }

    pub fn account_options(&self) -> &[AccountOption] {
        &self.account_options
    }

    /// Hands the current notice to the UI exactly once.
    pub fn take_notice(&mut self) -> Option<super::Notice> {
        self.notice.take()
    }
}

impl From<Account> for AccountOption {
    fn from(account: Account) -> Self {
        Self {
            value: account.id,
            label: account.name,
        }
    }
}
