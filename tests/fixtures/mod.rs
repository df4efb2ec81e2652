//! Test fixtures and sample data shared by the integration tests.

use chrono::{DateTime, TimeZone, Utc};
use contact_schema::{Contact, ContactId, CreateContactDto, EmailAddress};

/// A fixed instant, offset by `secs` seconds.
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_735_689_600 + secs, 0).unwrap()
}

/// The canonical creation payload: required fields only.
#[allow(dead_code)]
pub fn ada_dto() -> CreateContactDto {
    CreateContactDto::new(
        "Ada",
        "Lovelace",
        EmailAddress::new("ada@example.com").unwrap(),
    )
}

/// Ada created at `at(0)` with id `contact-ada`.
#[allow(dead_code)]
pub fn ada() -> Contact {
    Contact::create(ContactId::new("contact-ada").unwrap(), ada_dto(), at(0)).unwrap()
}

/// Create a contact with the given id, names and email at `at(0)`.
pub fn sample_contact(id: &str, first_name: &str, last_name: &str, email: &str) -> Contact {
    let dto = CreateContactDto::new(first_name, last_name, EmailAddress::new(email).unwrap());
    Contact::create(ContactId::new(id).unwrap(), dto, at(0)).unwrap()
}

/// A small address book with company, tags and favorites populated.
#[allow(dead_code)]
pub fn address_book() -> Vec<Contact> {
    let mut grace = sample_contact("c-grace", "Grace", "Hopper", "grace@navy.example.com");
    grace.company = Some("US Navy".to_string());
    grace.tags = Some(vec!["compilers".to_string(), "navy".to_string()]);
    grace.is_favorite = true;

    let mut alan = sample_contact("c-alan", "Alan", "Turing", "alan@bletchley.example.com");
    alan.tags = Some(vec!["cryptography".to_string()]);

    let mut ada = sample_contact("c-ada", "Ada", "Lovelace", "ada@example.com");
    ada.company = Some("Analytical Engines".to_string());
    ada.is_favorite = true;

    let charles = sample_contact("c-charles", "Charles", "Babbage", "charles@example.com");

    let mut edsger = sample_contact("c-edsger", "Edsger", "Dijkstra", "ewd@example.nl");
    edsger.tags = Some(vec!["compilers".to_string(), "algorithms".to_string()]);

    vec![grace, alan, ada, charles, edsger]
}
