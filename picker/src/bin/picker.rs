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

use clap::Parser;
use r3bl_picker::{CLIArg, CommonResult, HttpPeopleSource, SearchBoxConfig, StyleSheet,
                  log::try_initialize_logging_global, search_box, unrecoverable_error_msg};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    match run(&cli_arg).await {
        Ok(result) => println!("{result}"),
        Err(report) => {
            // % is Display, ? is Debug.
            tracing::error!(message = "picker failed", error = ?report);
            eprintln!("{}", unrecoverable_error_msg(&report));
            std::process::exit(1);
        }
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    Ok(())
}

async fn run(cli_arg: &CLIArg) -> CommonResult<r3bl_picker::SearchBoxResult> {
    let source = HttpPeopleSource::try_new(cli_arg.url.as_str())?;
    search_box(source, SearchBoxConfig::from(cli_arg), StyleSheet::default()).await
}
