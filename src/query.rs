//! SQL over named views.

use polars::prelude::DataFrame;

use crate::error::PipelineResult;
use crate::log::{LogEntry, preview};
use crate::session::Session;

/// Register `dataset` under `view_name` and execute `query` against it.
///
/// Registration is last-writer-wins: re-using a view name rebinds it to the
/// new dataset and subsequent queries see only that one. Engine errors
/// (syntax, unknown column) propagate to the caller untranslated.
///
/// Logs operation `"query data"` with the query text and a preview of the
/// result.
pub fn run_query(
    session: &mut Session,
    dataset: &DataFrame,
    query: &str,
    view_name: &str,
) -> PipelineResult<DataFrame> {
    session.register_view(view_name, dataset);

    let out = session.sql(query)?;

    session.record(LogEntry::with_query("query data", query, preview(&out)));

    Ok(out)
}
