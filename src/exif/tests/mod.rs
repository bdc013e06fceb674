//! Tests for the EXIF data access modules

mod test_utils;
