// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// The file is never rotated, since a picker session is short lived.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = match path.parent() {
        // A bare file name like `log.txt` has an empty parent, which means "here".
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => miette::bail!(
            "Can't access folder for {}. It might not exist, or don't have required permissions.",
            path.display()
        ),
    };

    let Some(file_name) = path.file_name() else {
        miette::bail!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}
