//! Line-based T-SQL `CREATE TABLE` parsing

mod column_parser;
mod identifier_utils;
mod statement_scanner;
mod table_parser;

pub use column_parser::extract_column;
pub use identifier_utils::extract_table_name;
pub use statement_scanner::{is_create_table_line, normalize_line, scan_statements, StatementGroup};
pub use table_parser::parse_table;

use crate::model::Table;

/// Scan raw lines and parse every `CREATE TABLE` statement found, in order
pub fn parse_lines<I, S>(lines: I) -> Vec<Table>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    scan_statements(lines)
        .iter()
        .filter_map(|group| parse_table(group))
        .collect()
}
