//! Purpose: `json-sort-fromremote <url>` alias for `json-sort load-from-url <url>`.
use std::env;

fn main() {
    let code = json_sort::alias::forward_to_subcommand(
        "json-sort-fromremote",
        "load-from-url",
        env::args_os().skip(1),
    );
    std::process::exit(code);
}
