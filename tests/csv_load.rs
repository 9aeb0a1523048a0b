use std::io::Write;
use std::sync::Arc;

use dataframe_etl::PipelineError;
use dataframe_etl::ingest::load_csv;
use dataframe_etl::log::MemoryLog;
use dataframe_etl::session::Session;
use dataframe_etl::types::{ColumnType, Field, Schema};

fn test_session() -> (Session, Arc<MemoryLog>) {
    let log = Arc::new(MemoryLog::new());
    let session = Session::start("test", log.clone());
    (session, log)
}

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn load_fixture_happy_path() {
    let (session, log) = test_session();
    let schema = Schema::comic_characters();

    let df = load_csv(&session, "tests/fixtures/characters.csv", &schema).unwrap();

    assert_eq!(df.height(), 12);
    assert_eq!(df.width(), schema.fields.len());
    let names: Vec<&str> = df.get_column_names().into_iter().map(|s| s.as_str()).collect();
    let expected: Vec<&str> = schema.field_names().collect();
    assert_eq!(names, expected);

    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].operation, "load data");
    assert_eq!(entries[0].query, None);
}

#[test]
fn load_preview_is_capped_at_ten_rows() {
    let (session, log) = test_session();

    // 12 data rows in the fixture; the preview must render only 10.
    load_csv(
        &session,
        "tests/fixtures/characters.csv",
        &Schema::comic_characters(),
    )
    .unwrap();

    let preview = &log.entries()[0].preview;
    assert!(preview.contains("shape: (10,"), "preview was: {preview}");
}

#[test]
fn load_preview_shows_all_rows_of_a_short_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "short.csv", "id,name\n1,Ada\n2,Grace\n");
    let schema = Schema::new(vec![
        Field::new("id", ColumnType::Int64),
        Field::new("name", ColumnType::Utf8),
    ]);

    let (session, log) = test_session();
    let df = load_csv(&session, &path, &schema).unwrap();

    assert_eq!(df.height(), 2);
    assert!(log.entries()[0].preview.contains("shape: (2,"));
}

#[test]
fn load_binds_columns_by_name_not_position() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "reordered.csv", "name,id\nAda,1\nGrace,2\n");
    let schema = Schema::new(vec![
        Field::new("id", ColumnType::Int64),
        Field::new("name", ColumnType::Utf8),
    ]);

    let (session, _log) = test_session();
    let df = load_csv(&session, &path, &schema).unwrap();

    // Result comes back in schema order regardless of file order.
    let names: Vec<&str> = df.get_column_names().into_iter().map(|s| s.as_str()).collect();
    assert_eq!(names, vec!["id", "name"]);
    let ids: Vec<Option<i64>> = df.column("id").unwrap().i64().unwrap().into_iter().collect();
    assert_eq!(ids, vec![Some(1), Some(2)]);
}

#[test]
fn load_coerces_unparseable_cells_to_null() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "bad_int.csv", "id,name\n1,Ada\nnot_a_number,Grace\n");
    let schema = Schema::new(vec![
        Field::new("id", ColumnType::Int64),
        Field::new("name", ColumnType::Utf8),
    ]);

    let (session, _log) = test_session();
    let df = load_csv(&session, &path, &schema).unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(df.column("id").unwrap().null_count(), 1);
    // The rest of the row survives.
    let names: Vec<Option<&str>> = df.column("name").unwrap().str().unwrap().into_iter().collect();
    assert_eq!(names, vec![Some("Ada"), Some("Grace")]);
}

#[test]
fn load_headerless_file_is_a_schema_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    // No header row: data values stand where the column names should be.
    let path = write_csv(&dir, "headerless.csv", "1,Ada\n2,Grace\n");
    let schema = Schema::new(vec![
        Field::new("id", ColumnType::Int64),
        Field::new("name", ColumnType::Utf8),
    ]);

    let (session, log) = test_session();
    let err = load_csv(&session, &path, &schema).unwrap_err();

    assert!(matches!(err, PipelineError::SchemaMismatch { .. }));
    assert!(err.to_string().contains("missing required column"));
    // Nothing logged for a failed load.
    assert!(log.entries().is_empty());
}

#[test]
fn load_missing_column_is_a_schema_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "missing.csv", "id\n1\n");
    let schema = Schema::new(vec![
        Field::new("id", ColumnType::Int64),
        Field::new("name", ColumnType::Utf8),
    ]);

    let (session, _log) = test_session();
    let err = load_csv(&session, &path, &schema).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required column 'name'"));
}

#[test]
fn load_rejects_nulls_in_non_nullable_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "nulls.csv", "id,name\n1,Ada\n,Grace\n");
    let schema = Schema::new(vec![
        Field::required("id", ColumnType::Int64),
        Field::new("name", ColumnType::Utf8),
    ]);

    let (session, _log) = test_session();
    let err = load_csv(&session, &path, &schema).unwrap_err();

    assert!(matches!(err, PipelineError::SchemaMismatch { .. }));
    assert!(err.to_string().contains("non-nullable"));
}
