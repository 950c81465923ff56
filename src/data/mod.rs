//! Data loading and processing utilities for the notebook starter.
//!
//! Every helper forwards to polars and hands its [`PolarsError`] back
//! untouched, including filesystem failures.

use polars::prelude::*;
use std::fs::File;
use std::path::Path;

mod describe;
mod sample;

pub use describe::{STATISTICS, describe};
pub use sample::{CATEGORIES, SAMPLE_ROWS, sample_data};

/// Load a CSV file with a header row into a DataFrame
pub fn load_csv(path: impl AsRef<Path>) -> PolarsResult<DataFrame> {
    let path = path.as_ref();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    tracing::debug!(path = %path.display(), rows = df.height(), columns = df.width(), "loaded csv");
    Ok(df)
}

/// Load a Parquet file into a DataFrame
pub fn load_parquet(path: impl AsRef<Path>) -> PolarsResult<DataFrame> {
    let path = path.as_ref();
    let df = ParquetReader::new(File::open(path)?).finish()?;
    tracing::debug!(path = %path.display(), rows = df.height(), columns = df.width(), "loaded parquet");
    Ok(df)
}

/// Save a DataFrame to a CSV file, replacing any existing file
pub fn save_csv(df: &mut DataFrame, path: impl AsRef<Path>) -> PolarsResult<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    tracing::debug!(path = %path.display(), rows = df.height(), "saved csv");
    Ok(())
}

/// Save a DataFrame to a Parquet file, replacing any existing file
pub fn save_parquet(df: &mut DataFrame, path: impl AsRef<Path>) -> PolarsResult<()> {
    let path = path.as_ref();
    let bytes = ParquetWriter::new(File::create(path)?).finish(df)?;
    tracing::debug!(path = %path.display(), rows = df.height(), bytes, "saved parquet");
    Ok(())
}
