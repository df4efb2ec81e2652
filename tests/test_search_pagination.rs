//! Integration tests for contact search and the pagination envelope.

mod fixtures;

use contact_schema::{search_contacts, Config, ContactQuery, ContactSearchResult};
use fixtures::*;

fn ids(result: &ContactSearchResult) -> Vec<&str> {
    result.contacts.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_unfiltered_search_is_sorted_by_last_name() {
    let result = search_contacts(
        &address_book(),
        &ContactQuery::new(),
        1,
        10,
        &Config::default(),
    )
    .unwrap();

    assert_eq!(
        ids(&result),
        vec!["c-charles", "c-edsger", "c-grace", "c-ada", "c-alan"]
    );
    assert_eq!(result.total, 5);
    assert_eq!(result.page, 1);
    assert_eq!(result.page_size, 10);
    assert!(result.is_consistent());
}

#[test]
fn test_favorites_with_tag() {
    let book = address_book();
    let config = Config::default();

    let favorites = search_contacts(&book, &ContactQuery::new().favorites_only(), 1, 10, &config)
        .unwrap();
    assert_eq!(ids(&favorites), vec!["c-grace", "c-ada"]);

    let compilers = search_contacts(&book, &ContactQuery::new().with_tag("Compilers"), 1, 10, &config)
        .unwrap();
    assert_eq!(ids(&compilers), vec!["c-edsger", "c-grace"]);

    let both = search_contacts(
        &book,
        &ContactQuery::new().with_tag("compilers").favorites_only(),
        1,
        10,
        &config,
    )
    .unwrap();
    assert_eq!(ids(&both), vec!["c-grace"]);
}

#[test]
fn test_text_search_over_email_and_company() {
    let book = address_book();
    let config = Config::default();

    let result = search_contacts(&book, &ContactQuery::new().with_text("example.com"), 1, 10, &config)
        .unwrap();
    assert_eq!(result.total, 4);

    let result = search_contacts(&book, &ContactQuery::new().with_text("NAVY"), 1, 10, &config)
        .unwrap();
    assert_eq!(ids(&result), vec!["c-grace"]);

    let result = search_contacts(&book, &ContactQuery::new().with_text("nobody"), 1, 10, &config)
        .unwrap();
    assert!(result.contacts.is_empty());
    assert_eq!(result.total, 0);
    assert_eq!(result.total_pages(), 0);
}

#[test]
fn test_walking_every_page_visits_each_contact_once() {
    let book = address_book();
    let config = Config::default();

    let mut seen = Vec::new();
    let mut page = 1;
    loop {
        let result = search_contacts(&book, &ContactQuery::new(), page, 2, &config).unwrap();
        assert!(result.contacts.len() <= result.page_size);
        assert!(result.total >= result.contacts.len());
        seen.extend(result.contacts.iter().map(|c| c.id.to_string()));

        if !result.has_next_page() {
            assert_eq!(result.total_pages(), 3);
            break;
        }
        page += 1;
    }

    assert_eq!(page, 3);
    assert_eq!(seen.len(), book.len());
}

#[test]
fn test_page_beyond_last_is_empty_but_keeps_total() {
    let result = search_contacts(
        &address_book(),
        &ContactQuery::new(),
        9,
        2,
        &Config::default(),
    )
    .unwrap();

    assert!(result.contacts.is_empty());
    assert_eq!(result.total, 5);
    assert!(!result.has_next_page());
    assert!(result.has_previous_page());
}

#[test]
fn test_envelope_rules() {
    let book = address_book();

    assert!(ContactSearchResult::new(book.clone(), 5, 1, 5).is_ok());
    assert!(ContactSearchResult::new(book.clone(), 50, 4, 5).is_ok());
    assert!(ContactSearchResult::new(book.clone(), 4, 1, 5).is_err());
    assert!(ContactSearchResult::new(book.clone(), 5, 1, 4).is_err());
    assert!(ContactSearchResult::new(book, 5, 0, 5).is_err());
}
