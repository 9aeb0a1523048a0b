//! Schema-driven CSV loading.
//!
//! The loader binds schema fields to CSV columns **by header name** rather
//! than by position, so a re-ordered file still loads correctly and a file
//! with a wrong or missing header fails loudly instead of yielding silently
//! misaligned data.

use std::path::Path;
use std::sync::Arc;

use polars::prelude::*;

use crate::error::{PipelineError, PipelineResult};
use crate::log::{LogEntry, preview};
use crate::session::Session;
use crate::types::Schema;

/// Load a comma-delimited file with a header row into a [`DataFrame`].
///
/// Rules:
///
/// - The header must contain every schema field name (order can differ);
///   otherwise [`PipelineError::SchemaMismatch`] is returned. A headerless
///   file trips this check because data values stand where names should be.
/// - Cell values are coerced to the schema's declared types; a cell that
///   fails coercion becomes null instead of aborting the load.
/// - The result is projected to the schema's columns, in schema order.
/// - Fields declared `nullable: false` must contain no nulls after the load.
///
/// Logs operation `"load data"` with a preview of the first 10 rows.
pub fn load_csv(
    session: &Session,
    path: impl AsRef<Path>,
    schema: &Schema,
) -> PipelineResult<DataFrame> {
    let path = path.as_ref();

    validate_header(path, schema)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_ignore_errors(true)
        .with_schema_overwrite(Some(Arc::new(schema.to_polars())))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    // Named-column binding: keep only schema columns, in schema order.
    let df = df.select(schema.field_names())?;

    enforce_nullability(&df, schema)?;

    session.record(LogEntry::new("load data", preview(&df)));

    Ok(df)
}

/// Check that the file's header row names every schema field.
fn validate_header(path: &Path, schema: &Schema) -> PipelineResult<()> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let headers = rdr.headers()?.clone();

    for field in &schema.fields {
        if !headers.iter().any(|h| h == field.name) {
            return Err(PipelineError::SchemaMismatch {
                message: format!(
                    "missing required column '{}'. headers={:?}",
                    field.name,
                    headers.iter().collect::<Vec<_>>()
                ),
            });
        }
    }

    Ok(())
}

fn enforce_nullability(df: &DataFrame, schema: &Schema) -> PipelineResult<()> {
    for field in schema.fields.iter().filter(|f| !f.nullable) {
        let nulls = df.column(field.name.as_str())?.null_count();
        if nulls > 0 {
            return Err(PipelineError::SchemaMismatch {
                message: format!(
                    "column '{}' is declared non-nullable but contains {nulls} null value(s)",
                    field.name
                ),
            });
        }
    }
    Ok(())
}
