//! SQL Server to PostgreSQL type mapping

mod type_mapper;

pub use type_mapper::{map_type, TargetType, DEFAULT_TIME_PRECISION};
