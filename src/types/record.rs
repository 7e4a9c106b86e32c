use byteorder::{ByteOrder, LittleEndian};

/// Number of 8-byte fields in one SBET record
pub const FIELD_COUNT: usize = 17;

/// Byte size of one SBET record on disk (17 little-endian doubles, no padding)
pub const RECORD_SIZE: usize = FIELD_COUNT * 8;

// Field byte offsets within a record
pub const OFFSET_TIME: usize = 0;
pub const OFFSET_LAT: usize = 8;
pub const OFFSET_LON: usize = 16;
pub const OFFSET_ALT: usize = 24;
pub const OFFSET_X_VEL: usize = 32;
pub const OFFSET_Y_VEL: usize = 40;
pub const OFFSET_Z_VEL: usize = 48;
pub const OFFSET_ROLL: usize = 56;
pub const OFFSET_PITCH: usize = 64;
pub const OFFSET_HEADING: usize = 72;
pub const OFFSET_WANDER: usize = 80;
pub const OFFSET_X_FORCE: usize = 88;
pub const OFFSET_Y_FORCE: usize = 96;
pub const OFFSET_Z_FORCE: usize = 104;
pub const OFFSET_X_ANG_RATE: usize = 112;
pub const OFFSET_Y_ANG_RATE: usize = 120;
pub const OFFSET_Z_ANG_RATE: usize = 128;

/// One navigation sample from an SBET file
///
/// Angles (`lat`, `lon`, `roll`, `pitch`, `heading`, `wander`) are in radians,
/// `alt` in meters, velocities in m/s and `time` in GPS seconds of week.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SbetRecord {
    pub time: f64,
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
    pub x_vel: f64,
    pub y_vel: f64,
    pub z_vel: f64,
    pub roll: f64,
    pub pitch: f64,
    pub heading: f64,
    pub wander: f64,
    pub x_force: f64,
    pub y_force: f64,
    pub z_force: f64,
    pub x_ang_rate: f64,
    pub y_ang_rate: f64,
    pub z_ang_rate: f64,
}

impl SbetRecord {
    /// Decode a record from its raw on-disk bytes
    pub fn from_bytes(buf: &[u8; RECORD_SIZE]) -> Self {
        let field = |offset: usize| LittleEndian::read_f64(&buf[offset..offset + 8]);

        Self {
            time: field(OFFSET_TIME),
            lat: field(OFFSET_LAT),
            lon: field(OFFSET_LON),
            alt: field(OFFSET_ALT),
            x_vel: field(OFFSET_X_VEL),
            y_vel: field(OFFSET_Y_VEL),
            z_vel: field(OFFSET_Z_VEL),
            roll: field(OFFSET_ROLL),
            pitch: field(OFFSET_PITCH),
            heading: field(OFFSET_HEADING),
            wander: field(OFFSET_WANDER),
            x_force: field(OFFSET_X_FORCE),
            y_force: field(OFFSET_Y_FORCE),
            z_force: field(OFFSET_Z_FORCE),
            x_ang_rate: field(OFFSET_X_ANG_RATE),
            y_ang_rate: field(OFFSET_Y_ANG_RATE),
            z_ang_rate: field(OFFSET_Z_ANG_RATE),
        }
    }

    /// Encode the record into the on-disk layout
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        let fields = [
            (OFFSET_TIME, self.time),
            (OFFSET_LAT, self.lat),
            (OFFSET_LON, self.lon),
            (OFFSET_ALT, self.alt),
            (OFFSET_X_VEL, self.x_vel),
            (OFFSET_Y_VEL, self.y_vel),
            (OFFSET_Z_VEL, self.z_vel),
            (OFFSET_ROLL, self.roll),
            (OFFSET_PITCH, self.pitch),
            (OFFSET_HEADING, self.heading),
            (OFFSET_WANDER, self.wander),
            (OFFSET_X_FORCE, self.x_force),
            (OFFSET_Y_FORCE, self.y_force),
            (OFFSET_Z_FORCE, self.z_force),
            (OFFSET_X_ANG_RATE, self.x_ang_rate),
            (OFFSET_Y_ANG_RATE, self.y_ang_rate),
            (OFFSET_Z_ANG_RATE, self.z_ang_rate),
        ];
        for (offset, value) in fields {
            LittleEndian::write_f64(&mut buf[offset..offset + 8], value);
        }
        buf
    }
}

/// The subset of a record written to one CSV line, angles already in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OutputRow {
    pub gps_time: f64,
    /// Longitude in degrees
    pub x: f64,
    /// Latitude in degrees
    pub y: f64,
    /// Altitude in meters
    pub z: f64,
    pub heading: f64,
    pub roll: f64,
    pub pitch: f64,
}

impl OutputRow {
    /// Values in CSV column order
    pub fn values(&self) -> [f64; 7] {
        [
            self.gps_time,
            self.x,
            self.y,
            self.z,
            self.heading,
            self.roll,
            self.pitch,
        ]
    }
}
