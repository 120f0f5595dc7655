//! Purpose: Hold top-level CLI command dispatch for `json-sort`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parsing; build the logger and run one flow.
//! Invariants: The logger lives exactly as long as one command execution.
//! Invariants: Any flow failure is reported once via `report_critical`, then mapped to an exit code.

use super::*;
use json_sort::api::{self, SortOptions, Source, to_exit_code};
use json_sort::failure::report_critical;
use json_sort::logging::Logger;

pub(super) fn dispatch_command(command: Command) -> RunOutcome {
    let (source, options) = match command {
        Command::LoadFromFile { file, output } => (Source::File(file), sort_options(output)),
        Command::LoadFromUrl { url, output } => (Source::Url(url), sort_options(output)),
    };

    let logger = Logger::new(options.verbose);
    logger.in_scope(|| match api::run(&source, &options) {
        Ok(()) => RunOutcome::ok(),
        Err(err) => {
            report_critical(&err);
            RunOutcome::with_code(to_exit_code(err.kind()))
        }
    })
}

fn sort_options(args: OutputArgs) -> SortOptions {
    let options = SortOptions::new().with_verbose(args.verbose);
    match args.output {
        Some(output) => options.with_output(output),
        None => options,
    }
}
