use chrono::NaiveDate;
use chrono::NaiveDateTime;
use crm_views::domain::account::Account;
use crm_views::domain::contact::Contact;
use crm_views::domain::types::RecordId;
use crm_views::gateway::memory::InMemoryGateway;

/// Quiet logger for test runs; repeated calls are fine.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn record_id(raw: &str) -> RecordId {
    RecordId::new(raw).unwrap()
}

fn created(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn contact(id: &str, name: &str, phone: &str, account: Option<&str>, day: u32, special: bool) -> Contact {
    Contact {
        id: record_id(id),
        name: name.to_string(),
        phone: Some(phone.to_string()),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        created_date: created(day),
        account_name: account.map(str::to_string),
        is_special: special,
    }
}

/// Gateway seeded with two accounts and seven contacts: enough for three
/// pages at the default page size of three.
pub fn seeded_gateway() -> InMemoryGateway {
    init_logging();
    let accounts = vec![
        Account {
            id: record_id("001000000001"),
            name: "Acme".to_string(),
            phone: Some("555-0001".to_string()),
            annual_revenue: Some(1_000_000.0),
        },
        Account {
            id: record_id("001000000002"),
            name: "Globex".to_string(),
            phone: None,
            annual_revenue: None,
        },
    ];
    let contacts = vec![
        contact("003000000001", "Amy Rivers", "555-0100", Some("Acme"), 1, true),
        contact("003000000002", "Ben Ode", "555-0101", Some("Acme"), 2, false),
        contact("003000000003", "Carla Voss", "555-0102", Some("Globex"), 3, false),
        contact("003000000004", "Dina Park", "555-0103", None, 4, true),
        contact("003000000005", "Eli Stone", "555-0104", Some("Globex"), 5, false),
        contact("003000000006", "Fay Marsh", "555-0105", None, 6, false),
        contact("003000000007", "Gus Hale", "555-0106", Some("Acme"), 7, false),
    ];
    InMemoryGateway::seed(accounts, contacts)
}
