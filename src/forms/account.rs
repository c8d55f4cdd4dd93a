//! Account-creation form.

use crate::domain::account::NewAccount;
use crate::gateway::AccountWriter;
use crate::gateway::errors::GatewayResult;

/// View-model for the new-account form. Values are kept exactly as entered;
/// the gateway owns validation and coercion.
#[derive(Default)]
pub struct AccountFormModel {
    draft: NewAccount,
    notice: Option<super::Notice>,
}

impl AccountFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: &str) {
        self.draft.name = value.to_string();
    }

    pub fn set_phone(&mut self, value: &str) {
        self.draft.phone = value.to_string();
    }

    pub fn set_annual_revenue(&mut self, value: &str) {
        self.draft.annual_revenue = value.to_string();
    }

    /// Submits the draft. On success the draft is cleared; on failure it is
    /// retained for a retry, matching the contact form's policy.
    pub fn submit<G>(&mut self, gateway: &G) -> GatewayResult<()>
    where
        G: AccountWriter + ?Sized,
    {
        match gateway.create_account(&self.draft) {
            Ok(()) => {
                self.notice = Some(super::Notice::success("Account created"));
                self.clear();
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to create account: {e}");
                self.notice = Some(super::Notice::error(format!("Failed to create account: {e}")));
                Err(e)
            }
        }
    }

    /// Resets every draft field (explicit cancel path).
    pub fn clear(&mut self) {
        self.draft = NewAccount::default();
    }

    pub fn draft(&self) -> &NewAccount {
        &self.draft
    }

    /// Hands the current notice to the UI exactly once.
    pub fn take_notice(&mut self) -> Option<super::Notice> {
        self.notice.take()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::types::RecordId;
    use crate::forms::NoticeLevel;
    use crate::gateway::errors::GatewayError;

    #[derive(Default)]
    struct FakeWriter {
        fail: bool,
        created: RefCell<Vec<NewAccount>>,
    }

    impl AccountWriter for FakeWriter {
        fn create_account(&self, draft: &NewAccount) -> GatewayResult<()> {
            if self.fail {
                return Err(GatewayError::Rejected("account name is required".to_string()));
            }
            self.created.borrow_mut().push(draft.clone());
            Ok(())
        }

        fn delete_account(&self, _id: &RecordId) -> GatewayResult<()> {
            Ok(())
        }
    }

    fn filled_form() -> AccountFormModel {
        let mut form = AccountFormModel::new();
        form.set_name("Globex");
        form.set_phone("555-0199");
        form.set_annual_revenue("250000");
        form
    }

    #[test]
    fn submit_success_clears_draft() {
        let mut form = filled_form();
        let writer = FakeWriter::default();

        form.submit(&writer).unwrap();

        assert_eq!(writer.created.borrow()[0].name, "Globex");
        assert!(form.draft().is_empty());
        assert_eq!(form.take_notice().unwrap().level, NoticeLevel::Success);
    }

    #[test]
    fn submit_failure_retains_draft() {
        let mut form = filled_form();
        let writer = FakeWriter {
            fail: true,
            ..FakeWriter::default()
        };

        assert!(form.submit(&writer).is_err());

        assert_eq!(form.draft().name, "Globex");
        assert_eq!(form.take_notice().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn cancel_clears_draft() {
        let mut form = filled_form();
        form.clear();
        assert!(form.draft().is_empty());
    }
}
