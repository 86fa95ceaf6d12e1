//! Turning a statement group into a [`Table`]
//!
//! The first line of a group carries the table name and the last line is
//! taken to be the closing `);`. Only the lines in between are read as
//! columns, so a column written on the closing line (`[x] INT);`) is dropped.

use tracing::debug;

use super::column_parser::extract_column;
use super::identifier_utils::extract_table_name;
use crate::model::Table;

/// Parse one statement group. Returns `None` for an empty group.
pub fn parse_table<S: AsRef<str>>(group: &[S]) -> Option<Table> {
    let Some(header) = group.first() else {
        debug!("Skipping empty statement group");
        return None;
    };

    let name = extract_table_name(header.as_ref());

    let body: &[S] = if group.len() > 2 {
        &group[1..group.len() - 1]
    } else {
        &[]
    };

    let columns = body
        .iter()
        .filter_map(|line| extract_column(line.as_ref()))
        .collect();

    Some(Table::new(name, columns))
}
