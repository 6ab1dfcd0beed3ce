// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_api_schema::{AccountAttributes, ApiResponse, EmployeeAttributes, RawAccount,
                      RawEmployee, RelationshipLink, Relationships, ResourceIdentifier};

use crate::{DisplayEntry, FetchError, FetchedPeople, PeopleSource};

pub fn raw_employee(
    id: &str,
    first_name: &str,
    last_name: &str,
    maybe_account_id: Option<&str>,
) -> RawEmployee {
    RawEmployee {
        id: id.to_string(),
        attributes: EmployeeAttributes {
            name: format!("{first_name} {last_name}"),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        },
        relationships: Relationships {
            account: maybe_account_id.map(|account_id| RelationshipLink {
                data: Some(ResourceIdentifier {
                    entity_type: "accounts".to_string(),
                    id: account_id.to_string(),
                }),
            }),
            ..Default::default()
        },
    }
}

pub fn raw_account(id: &str, email: &str) -> RawAccount {
    RawAccount {
        id: id.to_string(),
        attributes: AccountAttributes {
            email: email.to_string(),
        },
    }
}

/// `John Doe`, `Logan Doe`, `John Hancock`, in that (unsorted) order.
pub fn sample_entries() -> Vec<DisplayEntry> {
    vec![
        DisplayEntry::new("1", "John Doe", "John", "Doe", "john.doe@example.com"),
        DisplayEntry::new("2", "Logan Doe", "Logan", "Doe", "logan.doe@example.com"),
        DisplayEntry::new(
            "3",
            "John Hancock",
            "John",
            "Hancock",
            "john.hancock@example.com",
        ),
    ]
}

/// `count` entries named `Person 00`, `Person 01`, etc.
pub fn numbered_entries(count: usize) -> Vec<DisplayEntry> {
    (0..count)
        .map(|it| {
            DisplayEntry::new(
                it.to_string(),
                format!("Person {it:02}"),
                "Person",
                format!("{it:02}"),
                format!("person.{it}@example.com"),
            )
        })
        .collect()
}

pub fn sample_fetched_people() -> FetchedPeople {
    FetchedPeople {
        employees: vec![
            raw_employee("1", "John", "Doe", Some("a1")),
            raw_employee("2", "Logan", "Doe", Some("a2")),
            raw_employee("3", "John", "Hancock", Some("a3")),
        ],
        accounts: vec![
            raw_account("a1", "john.doe@example.com"),
            raw_account("a2", "logan.doe@example.com"),
            raw_account("a3", "john.hancock@example.com"),
        ],
    }
}

/// Same people as [`sample_fetched_people`], as the endpoint would send them.
pub const SAMPLE_DOCUMENT: &str = r#"{
    "data": [
        {
            "type": "employees", "id": "2",
            "attributes": { "firstName": "Logan", "lastName": "Doe", "name": "Logan Doe" },
            "relationships": { "account": { "data": { "type": "accounts", "id": "a2" } } }
        },
        {
            "type": "employees", "id": "3",
            "attributes": { "firstName": "John", "lastName": "Hancock", "name": "John Hancock" },
            "relationships": { "account": { "data": { "type": "accounts", "id": "a3" } } }
        },
        {
            "type": "employees", "id": "1",
            "attributes": { "firstName": "John", "lastName": "Doe", "name": "John Doe" },
            "relationships": { "account": { "data": { "type": "accounts", "id": "a1" } } }
        }
    ],
    "included": [
        { "type": "accounts", "id": "a1", "attributes": { "email": "john.doe@example.com" } },
        { "type": "companies", "id": "c1", "attributes": { "name": "Example" } },
        { "type": "accounts", "id": "a2", "attributes": { "email": "logan.doe@example.com" } },
        { "type": "accounts", "id": "a3", "attributes": { "email": "john.hancock@example.com" } }
    ],
    "meta": { "page": { "total": 3 } }
}"#;

#[derive(Debug, Clone)]
pub enum FakePeopleSource {
    Succeed(FetchedPeople),
    /// Fails with [`fake_fetch_error`].
    Fail,
    Panic,
    /// Never resolves.
    Hang,
}

/// The endpoint answered, but not with JSON.
pub fn fake_fetch_error() -> FetchError {
    FetchError::Parse(serde_json::from_slice::<ApiResponse>(b"<html>").unwrap_err())
}

impl PeopleSource for FakePeopleSource {
    async fn fetch_people(&self) -> Result<FetchedPeople, FetchError> {
        match self {
            FakePeopleSource::Succeed(people) => Ok(people.clone()),
            FakePeopleSource::Fail => Err(fake_fetch_error()),
            FakePeopleSource::Panic => panic!("fake fetch panic"),
            FakePeopleSource::Hang => std::future::pending().await,
        }
    }
}
