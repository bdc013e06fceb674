//! EXIF format constants
//!
//! This module defines constants used throughout the EXIF processing code,
//! making the code more readable and maintainable by replacing magic numbers
//! with descriptive names.

/// Standard EXIF/TIFF tag codes
pub mod tags {
    // Camera identification tags
    pub const MAKE: u16 = 271;                 // Camera manufacturer
    pub const MODEL: u16 = 272;                // Camera model
    pub const SOFTWARE: u16 = 305;             // Software used to create the image
    pub const ARTIST: u16 = 315;               // Person who created the image
    pub const COPYRIGHT: u16 = 33432;          // Copyright notice

    // Image structure tags
    pub const IMAGE_WIDTH: u16 = 256;          // Width of the image in pixels
    pub const IMAGE_LENGTH: u16 = 257;         // Height of the image in pixels
    pub const ORIENTATION: u16 = 274;          // Orientation of the image
    pub const X_RESOLUTION: u16 = 282;         // Horizontal resolution
    pub const Y_RESOLUTION: u16 = 283;         // Vertical resolution
    pub const RESOLUTION_UNIT: u16 = 296;      // Unit of measurement for resolution

    // Capture setting tags
    pub const EXPOSURE_TIME: u16 = 33434;      // Exposure time in seconds
    pub const F_NUMBER: u16 = 33437;           // F-number of the lens
    pub const ISO_SPEED_RATINGS: u16 = 34855;  // ISO sensitivity
    pub const DATE_TIME: u16 = 306;            // Date and time of file change
    pub const DATE_TIME_ORIGINAL: u16 = 36867; // Date and time of capture
    pub const FOCAL_LENGTH: u16 = 37386;       // Lens focal length in mm
    pub const FLASH: u16 = 37385;              // Flash firing status

    // Opaque payload tags
    pub const MAKER_NOTE: u16 = 37500;         // Manufacturer-private data blob
    pub const USER_COMMENT: u16 = 37510;       // Free-form comment with encoding prefix
    pub const EXIF_VERSION: u16 = 36864;       // Version bytes, not text

    // The composite GPS group
    pub const GPS_INFO: u16 = 34853;           // Pointer to the GPS sub-IFD
}

/// Fixed tag indices inside the GPS sub-table
///
/// The GPS IFD numbers its tags from zero; the four below are the only
/// ones needed to place an image on a map.
pub mod gps {
    pub const VERSION_ID: u16 = 0;      // GPS tag schema version
    pub const LATITUDE_REF: u16 = 1;    // "N" or "S"
    pub const LATITUDE: u16 = 2;        // Degrees/minutes/seconds triple
    pub const LONGITUDE_REF: u16 = 3;   // "E" or "W"
    pub const LONGITUDE: u16 = 4;       // Degrees/minutes/seconds triple
    pub const ALTITUDE_REF: u16 = 5;    // 0 = above sea level, 1 = below
    pub const ALTITUDE: u16 = 6;        // Altitude in meters
}
