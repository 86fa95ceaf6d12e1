//! Splitting raw script lines into `CREATE TABLE` statement groups.
//!
//! Boundaries are purely lexical. A statement starts on a line that has both
//! `create` and `table` as whitespace-separated tokens and ends on the first
//! line (the start line included) containing a `;`. A `;` inside a string
//! literal or comment therefore also ends the statement.

use super::identifier_utils::has_token;

/// Ordered, normalized (trimmed and lowercased) lines of one `CREATE TABLE`
/// statement, from the start line through the terminating line.
pub type StatementGroup = Vec<String>;

const TERMINATOR: char = ';';

/// Group raw lines into `CREATE TABLE` statements.
///
/// Lines outside a statement are dropped. Start lines are not looked for
/// while a statement is open, and a statement still open at end of input is
/// not returned.
pub fn scan_statements<I, S>(lines: I) -> Vec<StatementGroup>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups = Vec::new();
    let mut current: Option<StatementGroup> = None;

    for line in lines {
        let normalized = normalize_line(line.as_ref());

        if current.is_none() && is_create_table_line(&normalized) {
            current = Some(Vec::new());
        }

        let Some(group) = current.as_mut() else {
            continue;
        };

        let terminated = normalized.contains(TERMINATOR);
        group.push(normalized);

        if terminated {
            if let Some(group) = current.take() {
                groups.push(group);
            }
        }
    }

    groups
}

/// Trim and lowercase a raw line
pub fn normalize_line(line: &str) -> String {
    line.trim().to_lowercase()
}

/// Whether a normalized line opens a `CREATE TABLE` statement
pub fn is_create_table_line(line: &str) -> bool {
    has_token(line, "create") && has_token(line, "table")
}
