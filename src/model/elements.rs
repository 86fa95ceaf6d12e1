//! Table and column types produced by the parser

/// A parsed `CREATE TABLE` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Table name with schema qualifier and brackets removed (e.g. `foo` for `[dbo].[Foo]`)
    pub name: String,
    /// Columns in declaration order
    pub columns: Vec<Column>,
    /// Table-level constraints. Constraint clauses are detected and discarded,
    /// so this is always empty for now.
    pub constraints: Vec<Constraint>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            constraints: Vec::new(),
        }
    }
}

/// A single column definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    /// Lowercased source type keyword (e.g. "varchar", "datetime2")
    pub source_type: String,
    /// Numeric parameters that followed the type keyword
    pub type_extension: TypeExtension,
    pub nullability: Nullability,
}

/// Length, precision, or precision and scale attached to a type keyword
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeExtension {
    #[default]
    None,
    /// `VARCHAR(50)`, `DATETIME2(7)`
    Single(u32),
    /// `DECIMAL(10, 2)`
    Pair(u32, u32),
}

impl TypeExtension {
    /// First parameter, whether single or the precision of a pair
    pub fn first(&self) -> Option<u32> {
        match *self {
            TypeExtension::None => None,
            TypeExtension::Single(n) | TypeExtension::Pair(n, _) => Some(n),
        }
    }
}

/// Column nullability as written in the source, not a schema default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Nullability {
    NotNull,
    Nullable,
    #[default]
    Unspecified,
}

impl Nullability {
    /// Modifier emitted after the column type
    pub fn modifier(&self) -> &'static str {
        match self {
            Nullability::NotNull => "NOT NULL",
            Nullability::Nullable => "NULL",
            Nullability::Unspecified => "",
        }
    }
}

/// A table-level constraint (PRIMARY KEY, UNIQUE, ...). The parser doesn't
/// produce these yet; the renderer already emits a constraint pass per table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub name: String,
    pub definition: String,
}
