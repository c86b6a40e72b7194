//! Buffered JSONL writing and line-by-line reading.

use crate::error::JsonlError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from one collection write.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl WriteMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Write a record collection to a JSONL file, one record per line, in
/// input order.
///
/// The destination is created (truncated if it exists). A failed write is
/// fatal to the caller; any partially written file is left in place.
pub fn write_collection<T: Serialize, P: AsRef<Path>>(
    records: &[T],
    output_path: P,
) -> Result<WriteMetrics, JsonlError> {
    let start_time = Instant::now();
    let output_path = output_path.as_ref();

    let file = File::create(output_path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

    let mut rows_written = 0u64;
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
        rows_written += 1;

        if rows_written % 10_000 == 0 {
            debug!("written {} rows", rows_written);
        }
    }

    writer.flush()?;
    drop(writer);

    let metrics = WriteMetrics {
        rows_written,
        total_duration: start_time.elapsed(),
        file_size_bytes: std::fs::metadata(output_path)?.len(),
    };

    info!(
        "wrote '{}': {} rows, {} bytes in {:?} ({:.2} rows/sec)",
        output_path.display(),
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}

/// Read a JSONL file back into a record collection, line by line.
///
/// Empty lines are skipped. Used for verification and round-trip checks.
pub fn read_collection<T: DeserializeOwned, P: AsRef<Path>>(
    input_path: P,
) -> Result<Vec<T>, JsonlError> {
    let file = File::open(input_path.as_ref())?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}
