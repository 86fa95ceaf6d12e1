//! Writing parsed tables as PostgreSQL `CREATE TABLE` statements.
//!
//! All `CREATE TABLE` blocks come first, followed by one constraint block per
//! table so constraints can reference any table in the script.

use crate::mapping::map_type;
use crate::model::{Column, Table};

/// Render all tables into one DDL script, joined with newlines.
pub fn render_tables(tables: &[Table]) -> String {
    let create_blocks = tables.iter().map(render_table);
    let constraint_blocks = tables.iter().map(render_constraints);

    create_blocks
        .chain(constraint_blocks)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single `CREATE TABLE` statement
pub fn render_table(table: &Table) -> String {
    let columns = table
        .columns
        .iter()
        .map(|col| format!("\t{}", render_column(col)))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "CREATE TABLE {} IF NOT EXISTS (\n{}\n);",
        table.name, columns
    )
}

/// Render one column as `<name> <type> <modifier>`.
///
/// With no nullability modifier the line keeps its trailing space.
pub fn render_column(column: &Column) -> String {
    format!(
        "{} {} {}",
        column.name,
        map_type(&column.source_type, column.type_extension),
        column.nullability.modifier()
    )
}

/// `ALTER TABLE ... ADD CONSTRAINT` statements for a table. The parser
/// discards constraint clauses, so for parsed tables this is empty.
pub fn render_constraints(table: &Table) -> String {
    table
        .constraints
        .iter()
        .map(|c| {
            format!(
                "ALTER TABLE {} ADD CONSTRAINT {} {};",
                table.name, c.name, c.definition
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
