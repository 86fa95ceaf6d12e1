//! Reading SQL scripts from disk.
//!
//! SQL Server tooling writes scripts in several encodings: SSMS "Generate
//! Scripts" defaults to UTF-16 LE with a BOM, older files are often
//! Windows-1252. The bytes are decoded before being split into lines.

use std::path::Path;

use anyhow::Result;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::error::ConvertError;

/// Read a SQL file and return its lines (without line terminators)
pub fn read_sql_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|e| ConvertError::InputReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let content = decode_sql_bytes(&bytes).ok_or_else(|| ConvertError::InputDecodeError {
        path: path.to_path_buf(),
    })?;

    Ok(content.lines().map(str::to_string).collect())
}

/// Decode script bytes, honoring a BOM, then trying UTF-8, then Windows-1252
pub fn decode_sql_bytes(bytes: &[u8]) -> Option<String> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (!had_errors).then(|| decoded.into_owned());
    }

    let (decoded, had_errors) = UTF_8.decode_without_bom_handling(bytes);
    if !had_errors {
        return Some(decoded.into_owned());
    }

    let (decoded, _, had_errors) = WINDOWS_1252.decode(bytes);
    (!had_errors).then(|| decoded.into_owned())
}
