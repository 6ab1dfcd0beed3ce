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

use std::time::Duration;

use clap::{Args, Parser};

use crate::{DEFAULT_API_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_LIST_ARIA_LABEL,
            DEFAULT_MAX_VISIBLE_OPTIONS, DEFAULT_PLACEHOLDER, SearchBoxConfig};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "picker")]
#[command(about = "Pick a person from a searchable list 🔎")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nType to filter, Up and Down to move, Enter to pick, Enter again to submit, Esc to cancel.\nUSAGE 📓:\n  picker [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(long, default_value = DEFAULT_API_URL, help = "JSON endpoint to load people from")]
    pub url: String,

    #[arg(long, default_value = DEFAULT_PLACEHOLDER, help = "Shown in the empty textbox")]
    pub placeholder: String,

    #[arg(
        long,
        default_value = DEFAULT_LIST_ARIA_LABEL,
        help = "Accessible label of the option list"
    )]
    pub list_aria_label: String,

    #[arg(
        long,
        default_value_t = DEFAULT_DEBOUNCE_MS,
        help = "How long typing has to pause before the list is filtered"
    )]
    pub debounce_ms: u64,

    #[arg(
        long,
        default_value_t = DEFAULT_MAX_VISIBLE_OPTIONS,
        help = "How many options are visible before the list scrolls"
    )]
    pub max_height: usize,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

impl From<&CLIArg> for SearchBoxConfig {
    fn from(cli_arg: &CLIArg) -> Self {
        SearchBoxConfig {
            placeholder: cli_arg.placeholder.clone(),
            list_aria_label: cli_arg.list_aria_label.clone(),
            debounce: Duration::from_millis(cli_arg.debounce_ms),
            // An empty viewport would hide every option.
            max_visible_options: cli_arg.max_height.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["picker"]).unwrap();
        assert_eq!(cli_arg.url, DEFAULT_API_URL);
        assert!(!cli_arg.global_options.enable_logging);
        assert_eq!(SearchBoxConfig::from(&cli_arg), SearchBoxConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli_arg = CLIArg::try_parse_from([
            "picker",
            "--url",
            "http://localhost:1234/people.json",
            "--placeholder",
            "Choose Reviewer",
            "--list-aria-label",
            "Reviewer List",
            "--debounce-ms",
            "50",
            "--max-height",
            "0",
            "-l",
        ])
        .unwrap();

        assert_eq!(cli_arg.url, "http://localhost:1234/people.json");
        assert!(cli_arg.global_options.enable_logging);
        assert_eq!(
            SearchBoxConfig::from(&cli_arg),
            SearchBoxConfig {
                placeholder: "Choose Reviewer".to_string(),
                list_aria_label: "Reviewer List".to_string(),
                debounce: Duration::from_millis(50),
                max_visible_options: 1,
            }
        );
    }

    #[test]
    fn test_rejects_bad_number() {
        assert!(CLIArg::try_parse_from(["picker", "--debounce-ms", "soon"]).is_err());
    }
}
