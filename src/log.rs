//! Run log: one markdown entry per pipeline operation.
//!
//! The log is an injectable collaborator rather than process-global state:
//! operations hand a [`LogEntry`] to whatever [`RunLog`] the session was
//! started with. [`MarkdownLog`] appends to a markdown file; [`MemoryLog`]
//! collects entries in memory for tests.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use polars::prelude::DataFrame;

/// Number of rows included in logged previews.
pub const PREVIEW_ROWS: usize = 10;

/// Render the first [`PREVIEW_ROWS`] rows of a dataframe as a table.
///
/// The rendered row count is `min(PREVIEW_ROWS, total rows)`.
pub fn preview(df: &DataFrame) -> String {
    format!("{}", df.head(Some(PREVIEW_ROWS)))
}

/// A single logged operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Operation name, e.g. `"load data"`.
    pub operation: String,
    /// Query text, for query operations.
    pub query: Option<String>,
    /// Truncated textual rendering of the operation's result.
    pub preview: String,
}

impl LogEntry {
    /// Create an entry with no query text.
    pub fn new(operation: impl Into<String>, preview: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            query: None,
            preview: preview.into(),
        }
    }

    /// Create an entry carrying the executed query text.
    pub fn with_query(
        operation: impl Into<String>,
        query: impl Into<String>,
        preview: impl Into<String>,
    ) -> Self {
        Self {
            operation: operation.into(),
            query: Some(query.into()),
            preview: preview.into(),
        }
    }

    /// Render the entry in the markdown log format.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("The operation is {}\n\n", self.operation);
        if let Some(query) = &self.query {
            out.push_str(&format!("The query is {query}\n\n"));
        }
        out.push_str("The truncated output is: \n\n");
        out.push_str(&self.preview);
        out.push_str("\n\n");
        out
    }
}

/// Destination for pipeline log entries.
///
/// Implementors can append to a file, collect in memory, or forward elsewhere.
pub trait RunLog: Send + Sync {
    /// Record one operation.
    fn record(&self, entry: &LogEntry);
}

/// Appends entries to a local markdown file.
///
/// The file is opened lazily on each write and never truncated or rotated.
/// Writes are best-effort; failures to open/write the log file are ignored.
#[derive(Debug)]
pub struct MarkdownLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl MarkdownLog {
    /// Create a markdown log that appends entries to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }
}

impl RunLog for MarkdownLog {
    fn record(&self, entry: &LogEntry) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = f.write_all(entry.to_markdown().as_bytes());
        }
    }
}

/// Collects entries in memory, in record order.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLog {
    /// Create an empty in-memory log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl RunLog for MemoryLog {
    fn record(&self, entry: &LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.clone());
        }
    }
}
