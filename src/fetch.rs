//! Dataset download.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PipelineResult;

/// Default dataset: FiveThirtyEight's DC comic characters CSV.
pub const DC_CHARACTERS_URL: &str =
    "https://github.com/fivethirtyeight/data/blob/master/comic-characters/dc-wikia-data.csv?raw=true";

/// Download `url` to `destination`, creating `directory` first if absent.
///
/// The GET is blocking and the whole body is buffered before the destination
/// file is created, so a failed transfer leaves no partial file behind.
/// Non-2xx responses are treated as errors.
///
/// Returns the destination path on success.
pub fn fetch(
    url: &str,
    destination: impl AsRef<Path>,
    directory: impl AsRef<Path>,
) -> PipelineResult<PathBuf> {
    let destination = destination.as_ref();

    fs::create_dir_all(directory.as_ref())?;

    let body = reqwest::blocking::get(url)?.error_for_status()?.bytes()?;
    fs::write(destination, &body)?;

    Ok(destination.to_path_buf())
}
