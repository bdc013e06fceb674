//! Angular coordinate conversion
//!
//! GPS positions are stored in EXIF as sexagesimal degrees/minutes/seconds
//! triples with a separate hemisphere marker; map links want a single
//! signed decimal number per axis.

/// Converts a degrees/minutes/seconds angle to signed decimal degrees
///
/// `negative` selects the southern or western hemisphere. The components
/// are combined as-is: raw sensor data is assumed well-formed, so values
/// outside the usual minute/second ranges pass through unvalidated and
/// non-finite inputs follow ordinary floating-point arithmetic.
pub fn to_decimal_degrees(degrees: f64, minutes: f64, seconds: f64, negative: bool) -> f64 {
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    if negative {
        -decimal
    } else {
        decimal
    }
}
