//! Purpose: `json-sort` CLI entry point.
//! Role: Binary crate root; parses args and delegates to `command_dispatch`.
//! Invariants: Sorted JSON goes to stdout or `--output`; diagnostics go to stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code` (clap usage errors exit 2).
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

mod command_dispatch;

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    let cli = Cli::parse();
    let outcome = command_dispatch::dispatch_command(cli.command);
    std::process::exit(outcome.exit_code);
}

#[derive(Parser)]
#[command(
    name = "json-sort",
    version,
    about = "Re-emit a JSON document with its object keys sorted",
    long_about = None,
    after_help = r#"EXAMPLES
  $ json-sort load-from-file data.json
  $ json-sort load-from-file data.json -o sorted.json
  $ json-sort load-from-url https://example.com/api/items --verbose

Logging goes to stderr. Set JSON_SORT_LOG (e.g. `debug`) to override the level."#,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = "Read a local JSON file and emit it with sorted keys",
        after_help = r#"EXAMPLES
  $ json-sort load-from-file data.json
  $ json-sort load-from-file ./config/app.json -o app.sorted.json"#
    )]
    LoadFromFile {
        #[arg(help = "input file", value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    #[command(
        about = "Fetch JSON over HTTP GET and emit it with sorted keys",
        long_about = r#"Fetch JSON over HTTP GET and emit it with sorted keys.

The URL is used as the complete endpoint; nothing is appended to it."#,
        after_help = r#"EXAMPLES
  $ json-sort load-from-url https://example.com/api/items
  $ json-sort load-from-url http://localhost:8080/status -o status.json"#
    )]
    LoadFromUrl {
        #[arg(help = "url to fetch", value_hint = ValueHint::Url)]
        url: String,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "output file (default: stdout)",
        value_hint = ValueHint::FilePath
    )]
    output: Option<PathBuf>,
    #[arg(long, help = "increase output verbosity")]
    verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_and_verbose_default_off() {
        let cli = Cli::try_parse_from(["json-sort", "load-from-file", "in.json"]).expect("parse");
        match cli.command {
            Command::LoadFromFile { file, output } => {
                assert_eq!(file, PathBuf::from("in.json"));
                assert!(output.output.is_none());
                assert!(!output.verbose);
            }
            Command::LoadFromUrl { .. } => panic!("wrong command"),
        }
    }

    #[test]
    fn parses_short_output_and_verbose() {
        let cli = Cli::try_parse_from([
            "json-sort",
            "load-from-url",
            "https://example.com",
            "-o",
            "out.json",
            "--verbose",
        ])
        .expect("parse");
        match cli.command {
            Command::LoadFromUrl { url, output } => {
                assert_eq!(url, "https://example.com");
                assert_eq!(output.output, Some(PathBuf::from("out.json")));
                assert!(output.verbose);
            }
            Command::LoadFromFile { .. } => panic!("wrong command"),
        }
    }

    #[test]
    fn missing_positional_is_usage_error() {
        assert!(Cli::try_parse_from(["json-sort", "load-from-file"]).is_err());
    }
}
