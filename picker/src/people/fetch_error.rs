// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

/// Why the people list could not be loaded. The widget doesn't distinguish between
/// these when it reports a failure: the [`std::fmt::Display`] text of the error is shown
/// to the user verbatim, and the list is cleared.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum FetchError {
    #[error("{0}")]
    #[diagnostic(
        code(r3bl_picker::fetch::client_build),
        help("The TLS backend could not be initialized")
    )]
    ClientBuild(reqwest::Error),

    /// Network failure, timeout, or a non-success HTTP status.
    #[error("{0}")]
    #[diagnostic(
        code(r3bl_picker::fetch::request),
        help("Check the network connection, and that the URL is correct")
    )]
    Request(reqwest::Error),

    #[error("{0}")]
    #[diagnostic(
        code(r3bl_picker::fetch::parse),
        help("The endpoint did not return an employees document")
    )]
    Parse(serde_json::Error),

    /// The fetch task stopped before it sent an outcome, eg: it panicked.
    #[error("Fetch ended without a result")]
    #[diagnostic(code(r3bl_picker::fetch::task_ended))]
    TaskEnded,
}
