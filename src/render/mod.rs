//! PostgreSQL DDL generation

mod table_writer;

pub use table_writer::{render_column, render_constraints, render_table, render_tables};
