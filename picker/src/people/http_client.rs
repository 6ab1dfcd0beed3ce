// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::FetchError;

mod constants {
    pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
}

/// There's no explicit timeout. The underlying client's defaults apply, and the fetch
/// is never retried.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client builder fails to build
/// - TLS backend initialization fails
pub fn create_client_with_user_agent(
    user_agent: Option<&str>,
) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .user_agent(user_agent.map_or_else(
            /* none */ || constants::USER_AGENT.to_owned(),
            /* some */ ToOwned::to_owned,
        ))
        .build()
        .map_err(FetchError::ClientBuild)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        assert!(create_client_with_user_agent(None).is_ok());
        assert!(create_client_with_user_agent(Some("picker-test/1.0")).is_ok());
    }

    #[test]
    fn test_default_user_agent_names_this_crate() {
        assert!(constants::USER_AGENT.starts_with("r3bl_picker/"));
    }
}
