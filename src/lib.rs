//! SBET Extract Library
//!
//! Converts binary SBET (Smoothed Best Estimate of Trajectory) navigation
//! files into a CSV table of GPS time, position and orientation, for use by
//! time-indexed geolocation lookups.
//!
//! # Features
//!
//! - **`cli`** (default): Build the command-line interface binary
//!
//! # Quick Start
//!
//! Convert a file into `<output_dir>/sbet.csv`:
//! ```rust,no_run
//! use sbet_extract::{export_sbet_file, ExportOptions};
//! use std::path::Path;
//!
//! let options = ExportOptions::new("/data/flight01");
//! let report = export_sbet_file(Path::new("sbet_flight01.out"), &options).unwrap();
//! println!("Wrote {} rows", report.records_written);
//! ```
//!
//! Stream records from any reader:
//! ```rust
//! use sbet_extract::{OutputRow, SbetReader, SbetRecord};
//!
//! let bytes = SbetRecord { time: 100.0, ..Default::default() }.to_bytes();
//! for record in SbetReader::new(&bytes[..]) {
//!     let row = OutputRow::from_record(&record.unwrap());
//!     assert_eq!(row.gps_time, 100.0);
//! }
//! ```
//!
//! # Public API
//!
//! ## Reading
//! - [`SbetReader`] - Iterator over fixed-size records from any `Read`
//! - [`SbetRecord`] - One decoded navigation sample ([`RECORD_SIZE`] bytes)
//!
//! ## Conversion
//! - [`radians_to_degrees`] - Angle conversion applied to emitted angles
//! - [`OutputRow`] - The seven emitted fields
//!
//! ## Export
//! - [`export_sbet_file`] - File to `sbet.csv` conversion
//! - [`export_to_csv`] - Stream to stream conversion
//! - [`compute_output_path`] - Output path construction
//! - [`ExportReport`] - Summary of a conversion

pub mod conversion;
pub mod error;
pub mod export;
pub mod parser;
pub mod types;

pub use conversion::*;
pub use error::*;
pub use export::*;
pub use parser::*;
pub use types::*;
