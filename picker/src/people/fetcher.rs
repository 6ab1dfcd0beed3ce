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

use r3bl_api_schema::{ApiResponse, RawAccount, RawEmployee};

use super::{DisplayEntry, FetchError, adapt, create_client_with_user_agent};
use crate::DEBUG_FETCH_MOD;

/// The employees from `data` and the accounts from `included`, exactly as they were
/// received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedPeople {
    pub employees: Vec<RawEmployee>,
    pub accounts: Vec<RawAccount>,
}

impl From<ApiResponse> for FetchedPeople {
    fn from(api_response: ApiResponse) -> Self {
        let (employees, accounts) = api_response.into_parts();
        Self {
            employees,
            accounts,
        }
    }
}

/// Where the people come from. [`HttpPeopleSource`] is the real thing, tests provide
/// their own implementations.
pub trait PeopleSource: Send + Sync + 'static {
    /// Performs exactly one attempt. There is no retry and no caching.
    fn fetch_people(
        &self,
    ) -> impl Future<Output = Result<FetchedPeople, FetchError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpPeopleSource {
    pub url: String,
    client: reqwest::Client,
}

impl HttpPeopleSource {
    /// # Errors
    ///
    /// Returns an error if the HTTP client can't be created.
    pub fn try_new(url: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self {
            url: url.into(),
            client: create_client_with_user_agent(None)?,
        })
    }
}

impl PeopleSource for HttpPeopleSource {
    async fn fetch_people(&self) -> Result<FetchedPeople, FetchError> {
        try_fetch(&self.client, &self.url).await
    }
}

/// Issues one GET to `url` and parses the body as an [`ApiResponse`].
///
/// # Errors
///
/// Returns an error if:
/// - The request could not be sent, or the connection failed
/// - The response has a non-success status
/// - The body is not a valid employees document
pub async fn try_fetch(
    client: &reqwest::Client,
    url: &str,
) -> Result<FetchedPeople, FetchError> {
    DEBUG_FETCH_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Fetching people", url = %url);
    });

    let response = client.get(url).send().await.map_err(FetchError::Request)?;
    let response = response.error_for_status().map_err(FetchError::Request)?;
    let body = response.bytes().await.map_err(FetchError::Request)?;
    let api_response: ApiResponse =
        serde_json::from_slice(&body).map_err(FetchError::Parse)?;

    DEBUG_FETCH_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Fetched people",
            employees = %api_response.data.len(),
            included = %api_response.included.len(),
            total = ?api_response.meta.map(|it| it.page.total)
        );
    });

    Ok(api_response.into())
}

/// What the widget ends up with after a fetch: either the display list, or an empty
/// list and the error message to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome<T = DisplayEntry> {
    pub list: Vec<T>,
    pub error: Option<String>,
}

impl<T> LoadOutcome<T> {
    #[must_use]
    pub fn ok(list: Vec<T>) -> Self { Self { list, error: None } }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            list: vec![],
            error: Some(message.into()),
        }
    }
}

/// Fetch and adapt. Failures are caught here, at the fetcher boundary, so the caller
/// never sees a [`FetchError`], only the message.
pub async fn load_display_list(source: &impl PeopleSource) -> LoadOutcome {
    match source.fetch_people().await {
        Ok(people) => LoadOutcome::ok(adapt(&people.employees, &people.accounts)),
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(message = "Could not load people", error = ?error);
            LoadOutcome::failed(error.to_string())
        }
    }
}
