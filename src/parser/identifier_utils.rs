//! Identifier and token helpers shared by the line-based parsers.
//!
//! Lines reaching these helpers are already trimmed and lowercased by the
//! statement scanner, so keyword comparisons are plain equality.

use std::sync::LazyLock;

use regex::Regex;

/// Punctuation that never belongs to a column token. Each match is replaced by a
/// space so `name]varchar` style runs don't merge into one token.
static COLUMN_PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\](),;]").expect("valid regex"));

/// Characters stripped from a table header line before the name is read
static TABLE_NAME_PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\]()]").expect("valid regex"));

/// Whether `token` appears as a whole whitespace-separated token of `line`
pub fn has_token(line: &str, token: &str) -> bool {
    line.split_whitespace().any(|t| t == token)
}

/// Replace column punctuation with spaces and split into tokens.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(column_tokens("[id] int not null,"), vec!["id", "int", "not", "null"]);
/// assert_eq!(column_tokens(");"), Vec::<String>::new());
/// ```
pub fn column_tokens(line: &str) -> Vec<String> {
    COLUMN_PUNCTUATION_RE
        .replace_all(line, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Extract the unqualified table name from a `create table` header line.
///
/// The `create` and `table` keywords and any brackets or parentheses are
/// dropped; of a dotted name only the part after the last `.` is kept.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_table_name("create table [dbo].[foo] ("), "foo");
/// assert_eq!(extract_table_name("create table bar("), "bar");
/// ```
pub fn extract_table_name(line: &str) -> String {
    let without_keywords = line
        .split_whitespace()
        .filter(|t| *t != "create" && *t != "table")
        .collect::<Vec<_>>()
        .join(" ");
    let name = TABLE_NAME_PUNCTUATION_RE.replace_all(&without_keywords, "");
    let name = name.trim();

    match name.rsplit_once('.') {
        Some((_, unqualified)) => unqualified.trim().to_string(),
        None => name.to_string(),
    }
}

/// Whether a token is a non-empty run of ASCII digits
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
