//! Purpose: `json-sort-fromfile <file>` alias for `json-sort load-from-file <file>`.
use std::env;

fn main() {
    let code = json_sort::alias::forward_to_subcommand(
        "json-sort-fromfile",
        "load-from-file",
        env::args_os().skip(1),
    );
    std::process::exit(code);
}
