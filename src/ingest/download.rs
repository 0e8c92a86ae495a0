/// Dataset download client.
///
/// Retrieves the page-view CSV from its fixed source URL and writes the
/// response body verbatim to the local cache file. One blocking GET, no
/// retry, no checksum, no partial resume. The destination is overwritten
/// if it already exists.

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::dataset::Dataset;
use crate::model::DatasetError;

/// Fetch a dataset's CSV to `dest` and return the resulting file's byte size.
///
/// # Parameters
/// - `client`: HTTP client
/// - `dataset`: registry entry naming the source URL
/// - `dest`: destination path, created or overwritten
///
/// # Returns
/// Byte size of the written file, taken from the filesystem after the write
/// so the reported number is what actually landed on disk.
pub fn fetch_dataset(
    client: &reqwest::blocking::Client,
    dataset: &Dataset,
    dest: &Path,
) -> Result<u64, Box<dyn Error>> {
    let response = client.get(dataset.url).send()?;

    if !response.status().is_success() {
        return Err(Box::new(DatasetError::Http(response.status().as_u16())));
    }

    let body = response.bytes()?;
    fs::write(dest, &body)?;

    Ok(fs::metadata(dest)?.len())
}
