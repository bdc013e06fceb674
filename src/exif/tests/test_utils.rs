use std::io::Cursor;
use byteorder::{LittleEndian, WriteBytesExt};

/// Creates a little-endian TIFF buffer carrying EXIF fields and a GPS group
///
/// Layout: a 0th IFD with Make, Model, Orientation and a GPSInfo pointer,
/// followed by the string data, the GPS IFD (hemisphere markers inline,
/// coordinate triples at offsets) and the rational data. The position is
/// 10°30'00"N, 20°15'00"E.
pub fn create_exif_tiff_buffer() -> Cursor<Vec<u8>> {
    let mut buffer = Vec::new();

    // TIFF header (little-endian)
    buffer.write_u16::<LittleEndian>(0x4949).unwrap(); // II for little-endian
    buffer.write_u16::<LittleEndian>(42).unwrap();     // TIFF magic number
    buffer.write_u32::<LittleEndian>(8).unwrap();      // IFD offset

    // 0th IFD (at offset 8)
    buffer.write_u16::<LittleEndian>(4).unwrap();      // Entry count (4 entries)

    // Entry 1: Make (tag 271), ASCII, stored at offset 62
    buffer.write_u16::<LittleEndian>(271).unwrap();    // Tag
    buffer.write_u16::<LittleEndian>(2).unwrap();      // Type (ASCII)
    buffer.write_u32::<LittleEndian>(8).unwrap();      // Count ("TestCam\0")
    buffer.write_u32::<LittleEndian>(62).unwrap();     // Offset

    // Entry 2: Model (tag 272), ASCII, stored at offset 70
    buffer.write_u16::<LittleEndian>(272).unwrap();    // Tag
    buffer.write_u16::<LittleEndian>(2).unwrap();      // Type (ASCII)
    buffer.write_u32::<LittleEndian>(5).unwrap();      // Count ("X100\0")
    buffer.write_u32::<LittleEndian>(70).unwrap();     // Offset

    // Entry 3: Orientation (tag 274), SHORT, inline
    buffer.write_u16::<LittleEndian>(274).unwrap();    // Tag
    buffer.write_u16::<LittleEndian>(3).unwrap();      // Type (SHORT)
    buffer.write_u32::<LittleEndian>(1).unwrap();      // Count
    buffer.write_u16::<LittleEndian>(1).unwrap();      // Value (top-left)
    buffer.write_u16::<LittleEndian>(0).unwrap();      // Padding

    // Entry 4: GPSInfo pointer (tag 34853), LONG, GPS IFD at offset 76
    buffer.write_u16::<LittleEndian>(34853).unwrap();  // Tag
    buffer.write_u16::<LittleEndian>(4).unwrap();      // Type (LONG)
    buffer.write_u32::<LittleEndian>(1).unwrap();      // Count
    buffer.write_u32::<LittleEndian>(76).unwrap();     // GPS IFD offset

    // Next IFD offset (0 = no more IFDs)
    buffer.write_u32::<LittleEndian>(0).unwrap();

    // String data (offset 62): Make
    buffer.extend_from_slice(b"TestCam\0");
    // String data (offset 70): Model, padded to even length
    buffer.extend_from_slice(b"X100\0\0");

    // GPS IFD (at offset 76)
    buffer.write_u16::<LittleEndian>(4).unwrap();      // Entry count (4 entries)

    // Entry 1: GPSLatitudeRef (tag 1), ASCII, inline "N"
    buffer.write_u16::<LittleEndian>(1).unwrap();      // Tag
    buffer.write_u16::<LittleEndian>(2).unwrap();      // Type (ASCII)
    buffer.write_u32::<LittleEndian>(2).unwrap();      // Count ("N\0")
    buffer.extend_from_slice(b"N\0\0\0");              // Inline value + padding

    // Entry 2: GPSLatitude (tag 2), RATIONAL x3, stored at offset 130
    buffer.write_u16::<LittleEndian>(2).unwrap();      // Tag
    buffer.write_u16::<LittleEndian>(5).unwrap();      // Type (RATIONAL)
    buffer.write_u32::<LittleEndian>(3).unwrap();      // Count
    buffer.write_u32::<LittleEndian>(130).unwrap();    // Offset

    // Entry 3: GPSLongitudeRef (tag 3), ASCII, inline "E"
    buffer.write_u16::<LittleEndian>(3).unwrap();      // Tag
    buffer.write_u16::<LittleEndian>(2).unwrap();      // Type (ASCII)
    buffer.write_u32::<LittleEndian>(2).unwrap();      // Count ("E\0")
    buffer.extend_from_slice(b"E\0\0\0");              // Inline value + padding

    // Entry 4: GPSLongitude (tag 4), RATIONAL x3, stored at offset 154
    buffer.write_u16::<LittleEndian>(4).unwrap();      // Tag
    buffer.write_u16::<LittleEndian>(5).unwrap();      // Type (RATIONAL)
    buffer.write_u32::<LittleEndian>(3).unwrap();      // Count
    buffer.write_u32::<LittleEndian>(154).unwrap();    // Offset

    // Next IFD offset (0 = no more IFDs)
    buffer.write_u32::<LittleEndian>(0).unwrap();

    // Latitude rationals (offset 130): 10° 30' 0"
    for (num, den) in [(10u32, 1u32), (30, 1), (0, 1)] {
        buffer.write_u32::<LittleEndian>(num).unwrap();
        buffer.write_u32::<LittleEndian>(den).unwrap();
    }

    // Longitude rationals (offset 154): 20° 15' 0"
    for (num, den) in [(20u32, 1u32), (15, 1), (0, 1)] {
        buffer.write_u32::<LittleEndian>(num).unwrap();
        buffer.write_u32::<LittleEndian>(den).unwrap();
    }

    // Return cursor at position 0
    Cursor::new(buffer)
}

/// Creates a minimal JPEG buffer with no APP1 segment
///
/// A valid container that simply carries no EXIF block.
pub fn create_plain_jpeg_buffer() -> Cursor<Vec<u8>> {
    let mut buffer = Vec::new();

    buffer.extend_from_slice(&[0xFF, 0xD8]); // SOI
    buffer.extend_from_slice(&[0xFF, 0xD9]); // EOI

    Cursor::new(buffer)
}
