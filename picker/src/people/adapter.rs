// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

use r3bl_api_schema::{ApiResponse, RawAccount, RawEmployee};

use super::{DisplayEntry, locale_compare};

/// Converts the raw employees and accounts into display ready entries, sorted by name.
///
/// - The email comes from the account whose id matches the employee's account
///   reference. If there's no such account (or no reference at all) the email is empty.
///   When there are several accounts with the same id, the first one wins.
/// - The sort is stable, so entries with equal names keep their document order.
#[must_use]
pub fn adapt(raw_employees: &[RawEmployee], raw_accounts: &[RawAccount]) -> Vec<DisplayEntry> {
    let mut emails_by_account_id: HashMap<&str, &str> =
        HashMap::with_capacity(raw_accounts.len());
    for account in raw_accounts {
        emails_by_account_id
            .entry(account.id.as_str())
            .or_insert(account.attributes.email.as_str());
    }

    let mut return_it: Vec<DisplayEntry> = raw_employees
        .iter()
        .map(|employee| {
            let email = employee
                .account_id()
                .and_then(|account_id| emails_by_account_id.get(account_id))
                .copied()
                .unwrap_or_default();
            DisplayEntry::new(
                employee.id.as_str(),
                employee.attributes.name.as_str(),
                employee.attributes.first_name.as_str(),
                employee.attributes.last_name.as_str(),
                email,
            )
        })
        .collect();

    return_it.sort_by(|lhs, rhs| locale_compare(&lhs.name, &rhs.name));

    return_it
}

/// Same as [`adapt`] but takes the whole document.
#[must_use]
pub fn adapt_response(api_response: ApiResponse) -> Vec<DisplayEntry> {
    let (employees, accounts) = api_response.into_parts();
    adapt(&employees, &accounts)
}
