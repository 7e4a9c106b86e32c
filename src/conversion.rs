//! Unit conversion for SBET fields
//!
//! SBET stores all angles in radians. The CSV carries degrees for
//! longitude, latitude and the three orientation angles; time and altitude
//! pass through unchanged.

use crate::types::{OutputRow, SbetRecord};

/// Convert an angle from radians to degrees
///
/// No range normalization is applied, so negative values and values
/// beyond ±180 are preserved.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

impl OutputRow {
    /// Select and convert the emitted fields of a record
    pub fn from_record(record: &SbetRecord) -> Self {
        Self {
            gps_time: record.time,
            x: radians_to_degrees(record.lon),
            y: radians_to_degrees(record.lat),
            z: record.alt,
            heading: radians_to_degrees(record.heading),
            roll: radians_to_degrees(record.roll),
            pitch: radians_to_degrees(record.pitch),
        }
    }
}
