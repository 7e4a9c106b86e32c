//! CSV export for SBET data
//!
//! Streams records from a binary SBET source into a seven column CSV:
//! `GpsTime,X,Y,Z,Heading,Roll,Pitch`, one line per complete record.

use crate::error::{OpenMode, Result, SbetError};
use crate::parser::SbetReader;
use crate::types::OutputRow;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// File name written inside the output directory
pub const SBET_CSV_FILE_NAME: &str = "sbet.csv";

/// Column names, in the same order as [`OutputRow::values`]
pub const CSV_HEADER: [&str; 7] = ["GpsTime", "X", "Y", "Z", "Heading", "Roll", "Pitch"];

/// Export options for controlling output location
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: String,
}

impl ExportOptions {
    pub fn new(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        compute_output_path(&self.output_dir)
    }
}

/// Summary of a completed conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportReport {
    pub csv_path: Option<PathBuf>,
    pub records_written: u64,
    /// Bytes of an incomplete final record that produced no line
    pub trailing_bytes: usize,
    pub first_gps_time: Option<f64>,
    pub last_gps_time: Option<f64>,
    /// Records whose time is earlier than the previous record's
    pub time_regressions: u64,
}

impl ExportReport {
    /// Covered time span in seconds, if any records were written
    pub fn duration_seconds(&self) -> Option<f64> {
        Some(self.last_gps_time? - self.first_gps_time?)
    }
}

/// Join the fixed CSV file name onto an output directory
///
/// A separator is only inserted when `output_dir` does not already end
/// with one.
pub fn compute_output_path(output_dir: &str) -> PathBuf {
    let ends_with_separator = output_dir
        .chars()
        .last()
        .map(std::path::is_separator)
        .unwrap_or(false);

    if output_dir.is_empty() || ends_with_separator {
        PathBuf::from(format!("{output_dir}{SBET_CSV_FILE_NAME}"))
    } else {
        PathBuf::from(format!(
            "{output_dir}{}{SBET_CSV_FILE_NAME}",
            std::path::MAIN_SEPARATOR
        ))
    }
}

/// Format a value with six fractional digits, like C's `%f`
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        text.to_string()
    } else {
        format!("{value:.6}")
    }
}

/// Writes the SBET CSV header and rows to an output stream
pub struct SbetCsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SbetCsvWriter<W> {
    /// Create the writer and emit the header line
    pub fn new(output: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(output);
        writer.write_record(CSV_HEADER)?;
        Ok(Self { writer })
    }

    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        self.writer
            .write_record(row.values().iter().map(|v| format_fixed(*v)))?;
        Ok(())
    }

    /// Flush buffered rows and hand back the underlying stream
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| SbetError::Io(e.into_error()))
    }
}

/// Convert every complete record in `input` to a CSV row in `output`
pub fn export_to_csv<R: Read, W: Write>(input: R, output: W) -> Result<ExportReport> {
    let mut reader = SbetReader::new(input);
    let mut writer = SbetCsvWriter::new(output)?;
    let mut report = ExportReport::default();

    for record in reader.by_ref() {
        let record = record?;

        if let Some(last) = report.last_gps_time {
            if record.time < last {
                report.time_regressions += 1;
                debug!(
                    "GPS time goes backwards at record {}: {} < {}",
                    report.records_written, record.time, last
                );
            }
        }
        if report.first_gps_time.is_none() {
            report.first_gps_time = Some(record.time);
        }
        report.last_gps_time = Some(record.time);

        writer.write_row(&OutputRow::from_record(&record))?;
        report.records_written += 1;
    }

    let mut output = writer.finish()?;
    output.flush()?;

    report.trailing_bytes = reader.trailing_bytes();
    Ok(report)
}

/// Open an SBET file for binary reading
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| SbetError::open_failed(path, OpenMode::Read, e))
}

/// Create (or truncate) the CSV output file
pub fn create_output(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| SbetError::open_failed(path, OpenMode::Write, e))
}

/// Convert an SBET file into `<output_dir>/sbet.csv`
pub fn export_sbet_file(input_path: &Path, options: &ExportOptions) -> Result<ExportReport> {
    let input = open_input(input_path)?;
    if let Ok(metadata) = input.metadata() {
        debug!(
            "Input {} is {} bytes ({} records)",
            input_path.display(),
            metadata.len(),
            metadata.len() / crate::types::RECORD_SIZE as u64
        );
    }

    let csv_path = options.output_path();
    let output = create_output(&csv_path)?;

    eprintln!("Writing output file:\n  {}", csv_path.display());

    let mut report = export_to_csv(input, output)?;
    report.csv_path = Some(csv_path);

    if report.trailing_bytes > 0 {
        warn!(
            "Ignored {} trailing bytes (incomplete final record)",
            report.trailing_bytes
        );
    }
    if report.time_regressions > 0 {
        warn!(
            "GPS time decreased {} times; file may not be sorted",
            report.time_regressions
        );
    }
    info!("Converted {} records", report.records_written);

    Ok(report)
}
