//! Column definition extraction
//!
//! Works on one normalized line of a `CREATE TABLE` body:
//!
//! ```sql
//! [name] type[(length | precision[, scale])] [NOT NULL | NULL] ...
//! ```
//!
//! Only the name, the type keyword, up to two numeric parameters and the
//! nullability are read. Anything else on the line is ignored. Lines holding a
//! `CONSTRAINT` clause produce no column.

use tracing::debug;

use super::identifier_utils::{column_tokens, is_numeric};
use crate::model::{Column, Nullability, TypeExtension};

/// Extract a column from a normalized (trimmed, lowercased) line.
///
/// Returns `None` for lines that are empty once punctuation is removed and for
/// constraint clauses.
pub fn extract_column(line: &str) -> Option<Column> {
    let tokens = column_tokens(line);

    if tokens.is_empty() {
        debug!(line, "Skipping empty column line");
        return None;
    }

    if tokens.iter().any(|t| t == "constraint") {
        return None;
    }

    let name = tokens[0].clone();
    let source_type = tokens.get(1).cloned().unwrap_or_default();

    Some(Column {
        name,
        source_type,
        type_extension: parse_type_extension(&tokens),
        nullability: parse_nullability(&tokens),
    })
}

/// Read the numeric parameters at token positions 2 and 3.
///
/// A token that doesn't fit in `u32` is treated like a non-numeric one.
fn parse_type_extension(tokens: &[String]) -> TypeExtension {
    let numeric_at = |idx: usize| -> Option<u32> {
        tokens
            .get(idx)
            .filter(|t| is_numeric(t))
            .and_then(|t| t.parse().ok())
    };

    match (numeric_at(2), numeric_at(3)) {
        (Some(first), Some(second)) => TypeExtension::Pair(first, second),
        (Some(first), None) => TypeExtension::Single(first),
        (None, _) => TypeExtension::None,
    }
}

/// Nullability from token presence anywhere on the line
fn parse_nullability(tokens: &[String]) -> Nullability {
    let has = |word: &str| tokens.iter().any(|t| t == word);

    if has("not") && has("null") {
        Nullability::NotNull
    } else if has("null") {
        Nullability::Nullable
    } else {
        Nullability::Unspecified
    }
}
