//! File-based conversion tests

use pretty_assertions::assert_eq;

use crate::common::{create_sql_file, read_text, TestContext};

#[test]
fn test_convert_fixture_matches_expected() {
    let ctx = TestContext::with_fixture("inventory");

    let ddl = ctx.convert().expect("Conversion should succeed");

    assert_eq!(ddl, ctx.expected());
    assert_eq!(read_text(&ctx.output_path()), ctx.expected());
}

#[test]
fn test_convert_without_output_path_returns_ddl() {
    let file = create_sql_file("CREATE TABLE [dbo].[T] (\n  [Id] INT NOT NULL,\n);\n");

    let ddl = tsql_to_pg::convert_file(&tsql_to_pg::ConvertOptions {
        input_path: file.path().to_path_buf(),
        output_path: None,
        verbose: true,
    })
    .unwrap();

    assert_eq!(ddl, "CREATE TABLE t IF NOT EXISTS (\n\tid int NOT NULL\n);\n");
}

#[test]
fn test_convert_utf16_script() {
    let sql = "CREATE TABLE [dbo].[Foo] (\r\n [Id] INT NOT NULL,\r\n [Name] VARCHAR(50) NULL\r\n);\r\n";
    let mut bytes = vec![0xFF, 0xFE];
    for unit in sql.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let file = tempfile::NamedTempFile::with_suffix(".sql").unwrap();
    std::fs::write(file.path(), bytes).unwrap();

    let ddl = tsql_to_pg::convert_file(&tsql_to_pg::ConvertOptions {
        input_path: file.path().to_path_buf(),
        output_path: None,
        verbose: false,
    })
    .unwrap();

    assert_eq!(
        ddl,
        "CREATE TABLE foo IF NOT EXISTS (\n\tid int NOT NULL,\n\tname varchar(50) NULL\n);\n"
    );
}

#[test]
fn test_missing_input_reports_read_error() {
    let result = tsql_to_pg::convert_file(&tsql_to_pg::ConvertOptions {
        input_path: "/nonexistent/dir/script.sql".into(),
        output_path: None,
        verbose: false,
    });

    let err = result.unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<tsql_to_pg::ConvertError>(),
            Some(tsql_to_pg::ConvertError::InputReadError { .. })
        ),
        "Unexpected error: {:?}",
        err
    );
}

#[test]
fn test_unwritable_output_reports_write_error() {
    let file = create_sql_file("CREATE TABLE t (\n a INT\n);\n");

    let result = tsql_to_pg::convert_file(&tsql_to_pg::ConvertOptions {
        input_path: file.path().to_path_buf(),
        output_path: Some("/nonexistent/dir/out.sql".into()),
        verbose: false,
    });

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<tsql_to_pg::ConvertError>(),
        Some(tsql_to_pg::ConvertError::OutputWriteError { .. })
    ));
}
