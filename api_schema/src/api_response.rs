/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApiResponse {
    pub data: Vec<RawEmployee>,
    #[serde(default)]
    pub included: Vec<IncludedEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl ApiResponse {
    /// Only the accounts from `included`, in document order.
    pub fn accounts(&self) -> impl Iterator<Item = &RawAccount> {
        self.included.iter().filter_map(|entity| match entity {
            IncludedEntity::Account(account) => Some(account),
            IncludedEntity::Employee(_) | IncludedEntity::Other => None,
        })
    }

    /// Splits the document into the employees from `data` and the accounts from
    /// `included`. Everything else is dropped.
    #[must_use]
    pub fn into_parts(self) -> (Vec<RawEmployee>, Vec<RawAccount>) {
        let accounts = self
            .included
            .into_iter()
            .filter_map(|entity| match entity {
                IncludedEntity::Account(account) => Some(account),
                IncludedEntity::Employee(_) | IncludedEntity::Other => None,
            })
            .collect();
        (self.data, accounts)
    }
}

/// An entry in the `included` array. The `type` field picks the variant.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum IncludedEntity {
    #[serde(rename = "accounts")]
    Account(RawAccount),
    #[serde(rename = "employees")]
    Employee(RawEmployee),
    /// `companies`, or any type this schema doesn't know about.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawEmployee {
    pub id: String,
    pub attributes: EmployeeAttributes,
    #[serde(default)]
    pub relationships: Relationships,
}

impl RawEmployee {
    /// The id of the account this employee points at, if the relationship is present.
    #[must_use]
    pub fn account_id(&self) -> Option<&str> {
        self.relationships
            .account
            .as_ref()
            .and_then(|link| link.data.as_ref())
            .map(|it| it.id.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAttributes {
    pub name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Relationships {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<RelationshipLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<RelationshipLink>,
    #[serde(
        rename = "Manager",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub manager: Option<RelationshipLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RelationshipLink {
    #[serde(default)]
    pub data: Option<ResourceIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawAccount {
    pub id: String,
    pub attributes: AccountAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AccountAttributes {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Meta {
    pub page: Page,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Page {
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Links {
    #[serde(default, rename = "self")]
    pub self_link: String,
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
}
