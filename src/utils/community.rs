// src/utils/community.rs

use colored::Colorize;

use super::environment;

const STATEMENT: &str = "\
mlbox is built by and for a community that cares about the people its \
models affect. Please use these tools with consideration for the humans \
behind the data.";

/// Print the community statement to stderr. Honors MLBOX_QUIET. This is a
/// best-effort notification: it returns nothing and must never stop a
/// capability from loading.
pub fn community_statement() {
    if environment::quiet_requested() {
        return;
    }
    eprintln!("{}", "mlbox".bold().magenta());
    eprintln!("{}", STATEMENT.dimmed());
}
