//! Mock gateway for isolating view-models in downstream tests.

use mockall::mock;

use crate::domain::account::{Account, NewAccount};
use crate::domain::contact::NewContact;
use crate::domain::types::RecordId;
use crate::gateway::errors::GatewayResult;
use crate::gateway::{AccountReader, AccountWriter, ContactFilter, ContactQuery, ContactReader, ContactWriter};

mock! {
    pub Gateway {}

    impl ContactReader for Gateway {
        fn fetch_contacts_page(&self, query: &ContactQuery) -> GatewayResult<String>;
        fn fetch_contacts_count(&self, filter: &ContactFilter) -> GatewayResult<u64>;
    }

    impl ContactWriter for Gateway {
        fn create_contact(&self, draft: &NewContact) -> GatewayResult<()>;
    }

    impl AccountReader for Gateway {
        fn fetch_accounts(&self) -> GatewayResult<Vec<Account>>;
    }

    impl AccountWriter for Gateway {
        fn create_account(&self, draft: &NewAccount) -> GatewayResult<()>;
        fn delete_account(&self, id: &RecordId) -> GatewayResult<()>;
    }
}
