//! Per-numeric-column summary statistics.

use polars::prelude::*;

use crate::error::PipelineResult;
use crate::log::LogEntry;
use crate::session::Session;

/// Statistic row labels, in output order.
const STATISTICS: [&str; 5] = ["count", "mean", "stddev", "min", "max"];

/// Compute count/mean/stddev/min/max for every numeric column of `dataset`.
///
/// The result has a `statistic` label column followed by one column per
/// numeric input column. Values are rendered as strings, null where a
/// statistic is undefined (e.g. stddev of a single value). `count` is the
/// non-null count; `stddev` is the sample standard deviation (ddof = 1).
///
/// Logs operation `"describe data"` with the rendered table.
pub fn describe(session: &Session, dataset: &DataFrame) -> PipelineResult<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(dataset.width() + 1);
    columns.push(Column::new("statistic".into(), STATISTICS));

    for column in dataset.columns() {
        if !column.dtype().is_primitive_numeric() {
            continue;
        }

        let series = column.as_materialized_series().cast(&DataType::Float64)?;
        let values = series.f64()?;

        let count = (series.len() - series.null_count()) as i64;
        let rendered: Vec<Option<String>> = vec![
            Some(count.to_string()),
            values.mean().map(|v| v.to_string()),
            values.std(1).map(|v| v.to_string()),
            values.min().map(|v| v.to_string()),
            values.max().map(|v| v.to_string()),
        ];

        columns.push(Column::new(column.name().clone(), rendered));
    }

    let summary = DataFrame::new(STATISTICS.len(), columns)?;

    session.record(LogEntry::new("describe data", format!("{summary}")));

    Ok(summary)
}
