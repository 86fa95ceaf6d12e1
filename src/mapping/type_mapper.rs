//! Translation of SQL Server type keywords into PostgreSQL type syntax.
//!
//! Every source keyword is classified into a [`TargetType`], and each variant
//! knows how to render itself from the (optional) length/precision/scale that
//! followed the keyword. Keywords with no classification render as
//! `unknown(<keyword>)` so the output still shows what needs manual attention.

use tracing::debug;

use crate::model::TypeExtension;

/// Precision used for `time`, `datetime2` and `datetimeoffset` when none is given
pub const DEFAULT_TIME_PRECISION: u32 = 3;

/// Types whose PostgreSQL rendering ignores any parameters.
///
/// `double precision` is listed for completeness; the column extractor only
/// ever sees single-word keywords so it is reachable through [`map_type`] only.
static SIMPLE_TYPES: &[(&str, &str)] = &[
    ("bigint", "bigint"),
    ("binary", "bytea"),
    ("bit", "boolean"),
    ("date", "date"),
    ("datetime", "timestamp(3)"),
    ("double precision", "double precision"),
    ("float", "double precision"),
    ("real", "real"),
    ("image", "bytea"),
    ("int", "int"),
    ("integer", "integer"),
    ("money", "money"),
    ("ntext", "text"),
    ("rowversion", "bytea"),
    ("smalldatetime", "timestamp(0)"),
    ("smallint", "smallint"),
    ("smallmoney", "money"),
    ("text", "text"),
    ("timestamp", "bytea"),
    ("tinyint", "smallint"),
    ("uniqueidentifier", "char(16)"),
    ("varbinary", "bytea"),
    ("xml", "xml"),
];

/// Rendering rule for a recognized source type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    /// Fixed target string, parameters ignored
    Simple(&'static str),
    /// `name(n)` from a length; bare name when no length was given
    Length(&'static str),
    /// `name(p)` from a fractional-seconds precision, defaulting to 3
    Precision(&'static str),
    /// `dec(m, n)` only when both precision and scale are given
    Dec,
    /// `decimal(m)` from the precision alone
    Numeric,
    /// `decimal(m, n)` only when both precision and scale are given
    Decimal,
}

impl TargetType {
    /// Classify a lowercased source keyword
    pub fn classify(source_type: &str) -> Option<Self> {
        if let Some((_, target)) = SIMPLE_TYPES.iter().find(|(src, _)| *src == source_type) {
            return Some(TargetType::Simple(*target));
        }

        let compound = match source_type {
            "char" => TargetType::Length("char"),
            "character" => TargetType::Length("character"),
            "varchar" | "nvarchar" => TargetType::Length("varchar"),
            "time" => TargetType::Precision("time"),
            "datetime2" | "datetimeoffset" => TargetType::Precision("timestamp"),
            "dec" => TargetType::Dec,
            "numeric" => TargetType::Numeric,
            "decimal" => TargetType::Decimal,
            _ => return None,
        };
        Some(compound)
    }

    /// Render the target type for the given parameters
    pub fn render(&self, extension: TypeExtension) -> String {
        match (*self, extension) {
            (TargetType::Simple(name), _) => name.to_string(),

            (TargetType::Length(name), ext) => match ext.first() {
                Some(len) => format!("{}({})", name, len),
                None => name.to_string(),
            },

            (TargetType::Precision(name), ext) => {
                format!("{}({})", name, ext.first().unwrap_or(DEFAULT_TIME_PRECISION))
            }

            (TargetType::Dec, TypeExtension::Pair(p, s)) => format!("dec({}, {})", p, s),
            (TargetType::Dec, _) => "dec".to_string(),

            (TargetType::Numeric, ext) => match ext.first() {
                Some(p) => format!("decimal({})", p),
                None => "decimal".to_string(),
            },

            (TargetType::Decimal, TypeExtension::Pair(p, s)) => format!("decimal({}, {})", p, s),
            (TargetType::Decimal, _) => "decimal".to_string(),
        }
    }
}

/// Map a SQL Server type keyword and its parameters to PostgreSQL syntax.
///
/// Never fails: unrecognized keywords come back as `unknown(<keyword>)`.
pub fn map_type(source_type: &str, extension: TypeExtension) -> String {
    match TargetType::classify(source_type) {
        Some(target) => target.render(extension),
        None => {
            debug!(source_type, "No PostgreSQL mapping for type");
            format!("unknown({})", source_type)
        }
    }
}
