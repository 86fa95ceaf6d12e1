//! tsql-to-pg: Convert SQL Server `CREATE TABLE` scripts into PostgreSQL DDL
//!
//! The conversion runs in three stages: raw lines are grouped into
//! `CREATE TABLE` statements, each statement is parsed into a table model,
//! and the tables are rendered with every column type mapped to PostgreSQL.

pub mod error;
pub mod input;
pub mod mapping;
pub mod model;
pub mod parser;
pub mod render;

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

pub use error::ConvertError;
pub use mapping::map_type;
pub use model::{Column, Nullability, Table, TypeExtension};

/// Options for converting a SQL script
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Path to the SQL Server script
    pub input_path: PathBuf,
    /// Where to write the PostgreSQL DDL. When `None` the DDL is only returned.
    pub output_path: Option<PathBuf>,
    /// Enable verbose output
    pub verbose: bool,
}

/// Convert raw script lines into PostgreSQL DDL
pub fn convert_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tables = parser::parse_lines(lines);
    let columns: usize = tables.iter().map(|t| t.columns.len()).sum();
    info!(tables = tables.len(), columns, "Parsed CREATE TABLE statements");

    render::render_tables(&tables)
}

/// Convert an in-memory SQL script into PostgreSQL DDL
pub fn convert_str(sql: &str) -> String {
    convert_lines(sql.lines())
}

/// Convert a SQL file, writing the result to `output_path` when one is set.
///
/// Returns the generated DDL either way.
pub fn convert_file(options: &ConvertOptions) -> Result<String> {
    if options.verbose {
        info!(path = %options.input_path.display(), "Converting script");
    }

    let lines = input::read_sql_lines(&options.input_path)?;
    let ddl = convert_lines(&lines);

    if let Some(output_path) = &options.output_path {
        std::fs::write(output_path, &ddl).map_err(|e| ConvertError::OutputWriteError {
            path: output_path.clone(),
            source: e,
        })?;
        info!(path = %output_path.display(), "Wrote PostgreSQL DDL");
    }

    Ok(ddl)
}
