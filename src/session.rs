//! Engine session: named-view registry, SQL execution, and the run log.

use std::sync::Arc;

use polars::prelude::*;
use polars_sql::SQLContext;

use crate::error::PipelineResult;
use crate::log::{LogEntry, RunLog};

/// A handle to the dataframe engine.
///
/// Holds the SQL context (the named-view registry) and the injected
/// [`RunLog`]. Operations in [`crate::ingest`], [`crate::query`],
/// [`crate::stats`] and [`crate::transform`] record their log entries through
/// it. Views registered here live as long as the session.
pub struct Session {
    app_name: String,
    ctx: SQLContext,
    log: Arc<dyn RunLog>,
}

impl Session {
    /// Start a session with a fresh, empty view registry.
    pub fn start(app_name: impl Into<String>, log: Arc<dyn RunLog>) -> Self {
        Self {
            app_name: app_name.into(),
            ctx: SQLContext::new(),
            log,
        }
    }

    /// Name this session was started with.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Register `dataset` under `name` so SQL can reference it.
    ///
    /// Re-registering an existing name replaces the previous binding
    /// (last-writer-wins); there is no conflict error.
    pub fn register_view(&mut self, name: &str, dataset: &DataFrame) {
        self.ctx.register(name, dataset.clone().lazy());
    }

    /// Execute SQL against the registered views and collect the result.
    ///
    /// Syntax and unknown-column errors from the engine propagate
    /// untranslated.
    pub fn sql(&mut self, query: &str) -> PipelineResult<DataFrame> {
        let out = self.ctx.execute(query)?.collect()?;
        Ok(out)
    }

    /// Forward an entry to the session's run log.
    pub fn record(&self, entry: LogEntry) {
        self.log.record(&entry);
    }

    /// Stop the session, dropping the view registry.
    pub fn stop(self) -> &'static str {
        "stopped session"
    }
}
