//! `dataframe-etl` is a small library for fetching a CSV dataset, loading it
//! into a [Polars](https://pola.rs) dataframe with an explicit [`types::Schema`],
//! running SQL against named views, and logging truncated previews of every
//! operation to a markdown run log.
//!
//! The pipeline is: [`fetch::fetch`] → [`ingest::load_csv`] → any of
//! [`query::run_query`], [`stats::describe`], [`transform::categorize`]. Each
//! step produces a new [`polars::prelude::DataFrame`] and records a
//! [`log::LogEntry`] through the session's injected [`log::RunLog`].
//!
//! ## Quick example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use dataframe_etl::fetch::{DC_CHARACTERS_URL, fetch};
//! use dataframe_etl::ingest::load_csv;
//! use dataframe_etl::log::MarkdownLog;
//! use dataframe_etl::query::run_query;
//! use dataframe_etl::session::Session;
//! use dataframe_etl::stats::describe;
//! use dataframe_etl::transform::categorize;
//! use dataframe_etl::types::Schema;
//!
//! # fn main() -> Result<(), dataframe_etl::PipelineError> {
//! let mut session = Session::start(
//!     "comic_characters",
//!     Arc::new(MarkdownLog::new("pipeline_output.md")),
//! );
//!
//! let path = fetch(DC_CHARACTERS_URL, "data/comic_characters.csv", "data")?;
//! let df = load_csv(&session, &path, &Schema::comic_characters())?;
//!
//! let good = run_query(
//!     &mut session,
//!     &df,
//!     "SELECT name, APPEARANCES FROM comic_characters \
//!      WHERE ALIGN = 'Good Characters' ORDER BY APPEARANCES DESC LIMIT 10",
//!     "comic_characters",
//! )?;
//!
//! let _summary = describe(&session, &df)?;
//! let _categorized = categorize(&session, &df)?;
//! # let _ = good;
//!
//! println!("{}", session.stop());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`fetch`]: HTTP download of a remote dataset
//! - [`session`]: engine handle (named-view registry + SQL + run log)
//! - [`ingest`]: schema-driven CSV loading
//! - [`query`]: SQL execution against named views
//! - [`stats`]: per-numeric-column summary statistics
//! - [`transform`]: derived columns from ordered first-match-wins rules
//! - [`log`]: injectable markdown run log
//! - [`types`]: schema model (named, typed, nullable columns)
//! - [`error`]: error types used across the pipeline
//!
//! ## Error handling
//!
//! Every fallible operation returns [`PipelineResult`]. No component retries
//! or recovers; the first failure aborts the run and surfaces to the caller.

pub mod error;
pub mod fetch;
pub mod ingest;
pub mod log;
pub mod query;
pub mod session;
pub mod stats;
pub mod transform;
pub mod types;

pub use error::{PipelineError, PipelineResult};
