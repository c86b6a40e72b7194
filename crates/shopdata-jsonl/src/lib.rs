//! JSONL (JSON Lines) sink for shopdata record collections.
//!
//! Each collection is written as one file with one self-describing JSON
//! object per line, in input order. The sink is the only failure surface
//! of a generation run: an unwritable destination aborts the run and
//! partial files are left behind.
//!
//! # Example
//!
//! ```ignore
//! use shopdata_jsonl::write_collection;
//!
//! let metrics = write_collection(&customers, "data/customers.jsonl")?;
//! println!("wrote {} rows in {:?}", metrics.rows_written, metrics.total_duration);
//! ```

pub mod error;
pub mod writer;

pub use error::JsonlError;
pub use writer::{read_collection, write_collection, WriteMetrics};
