//! Metadata normalization
//!
//! This module turns the raw tag table into the human-readable mapping
//! the output sinks consume. Tag codes resolve to canonical names via
//! the standard dictionary, opaque binary payloads are filtered out, and
//! the GPS group collapses into a single map-link entry.

use log::debug;

use crate::exif::constants::gps;
use crate::exif::dictionary::TagDictionary;
use crate::exif::table::RawTagTable;
use crate::exif::value::TagValue;
use crate::metadata::coordinate::to_decimal_degrees;

/// A single normalized metadata entry
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataEntry {
    /// Canonical tag name
    pub name: String,
    /// Display-ready value
    pub value: TagValue,
}

/// Normalized name-to-value metadata for one image, in raw-table order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedMetadata {
    entries: Vec<MetadataEntry>,
}

impl NormalizedMetadata {
    fn push(&mut self, name: &str, value: TagValue) {
        self.entries.push(MetadataEntry {
            name: name.to_string(),
            value,
        });
    }

    /// Looks up the value for a tag name
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    /// Iterates entries in raw-table order
    pub fn iter(&self) -> impl Iterator<Item = &MetadataEntry> + '_ {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any entries were produced
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalizes raw tag tables into display-ready metadata
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Produces the normalized mapping for one raw tag table
    ///
    /// Per entry: codes with no dictionary name are skipped, binary
    /// payloads are skipped, the GPS group becomes a map link when its
    /// hemisphere markers and both coordinate triples are all present
    /// (and nothing at all otherwise), and every other value passes
    /// through unchanged. The raw table is only borrowed, so repeated
    /// extraction yields identical output.
    ///
    /// # Arguments
    /// * `raw` - The raw tag table read from an image
    /// * `dictionary` - Tag-code-to-name lookup
    ///
    /// # Returns
    /// The normalized metadata mapping
    pub fn extract(raw: &RawTagTable, dictionary: &TagDictionary) -> NormalizedMetadata {
        let mut metadata = NormalizedMetadata::default();

        for (code, value) in raw.iter() {
            let Some(name) = dictionary.lookup(code) else {
                debug!("Skipping tag {} with no dictionary name", code);
                continue;
            };

            if name == "GPSInfo" {
                // Partial GPS data counts as no GPS data at all
                if let Some(link) = Self::gps_map_link(value) {
                    metadata.push(name, TagValue::Text(link));
                }
                continue;
            }

            if value.is_binary() {
                debug!("Skipping binary payload for tag {} ({})", code, name);
                continue;
            }

            metadata.push(name, value.clone());
        }

        metadata
    }

    /// Builds the map link for a complete GPS group
    ///
    /// Requires the latitude hemisphere, latitude triple, longitude
    /// hemisphere and longitude triple; any gap or mistyped component
    /// yields None.
    fn gps_map_link(value: &TagValue) -> Option<String> {
        let group = value.as_sub_table()?;

        let lat_ref = group.get(gps::LATITUDE_REF)?.as_text()?;
        let (lat_d, lat_m, lat_s) = group.get(gps::LATITUDE)?.as_triple()?;
        let lon_ref = group.get(gps::LONGITUDE_REF)?.as_text()?;
        let (lon_d, lon_m, lon_s) = group.get(gps::LONGITUDE)?.as_triple()?;

        let latitude = to_decimal_degrees(lat_d, lat_m, lat_s, lat_ref == "S");
        let longitude = to_decimal_degrees(lon_d, lon_m, lon_s, lon_ref == "W");

        Some(format!(
            "https://maps.google.com/?q={},{}",
            format_degrees(latitude),
            format_degrees(longitude)
        ))
    }
}

/// Decimal rendering that keeps an explicit decimal point on whole degrees
fn format_degrees(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::constants::tags;

    fn gps_group(entries: &[(u16, TagValue)]) -> TagValue {
        let mut group = RawTagTable::new();
        for (code, value) in entries {
            group.insert(*code, value.clone());
        }
        TagValue::SubTable(group)
    }

    fn full_gps_group() -> TagValue {
        gps_group(&[
            (gps::LATITUDE_REF, TagValue::Text("S".to_string())),
            (gps::LATITUDE, TagValue::FloatList(vec![1.0, 0.0, 0.0])),
            (gps::LONGITUDE_REF, TagValue::Text("E".to_string())),
            (gps::LONGITUDE, TagValue::FloatList(vec![2.0, 0.0, 0.0])),
        ])
    }

    #[test]
    fn test_gps_composite_becomes_map_link() {
        let mut raw = RawTagTable::new();
        raw.insert(tags::GPS_INFO, full_gps_group());

        let metadata = MetadataExtractor::extract(&raw, TagDictionary::standard());

        assert_eq!(
            metadata.get("GPSInfo"),
            Some(&TagValue::Text(
                "https://maps.google.com/?q=-1.0,2.0".to_string()
            ))
        );
    }

    #[test]
    fn test_gps_hemisphere_signs() {
        let mut raw = RawTagTable::new();
        raw.insert(
            tags::GPS_INFO,
            gps_group(&[
                (gps::LATITUDE_REF, TagValue::Text("N".to_string())),
                (gps::LATITUDE, TagValue::FloatList(vec![10.0, 30.0, 0.0])),
                (gps::LONGITUDE_REF, TagValue::Text("W".to_string())),
                (gps::LONGITUDE, TagValue::FloatList(vec![20.0, 15.0, 0.0])),
            ]),
        );

        let metadata = MetadataExtractor::extract(&raw, TagDictionary::standard());

        assert_eq!(
            metadata.get("GPSInfo"),
            Some(&TagValue::Text(
                "https://maps.google.com/?q=10.5,-20.25".to_string()
            ))
        );
    }

    #[test]
    fn test_gps_missing_any_key_emits_nothing() {
        let required = [
            gps::LATITUDE_REF,
            gps::LATITUDE,
            gps::LONGITUDE_REF,
            gps::LONGITUDE,
        ];

        for missing in required {
            let mut group = RawTagTable::new();
            group.insert(gps::LATITUDE_REF, TagValue::Text("N".to_string()));
            group.insert(gps::LATITUDE, TagValue::FloatList(vec![1.0, 0.0, 0.0]));
            group.insert(gps::LONGITUDE_REF, TagValue::Text("E".to_string()));
            group.insert(gps::LONGITUDE, TagValue::FloatList(vec![2.0, 0.0, 0.0]));

            let mut stripped = RawTagTable::new();
            for (code, value) in group.iter() {
                if code != missing {
                    stripped.insert(code, value.clone());
                }
            }

            let mut raw = RawTagTable::new();
            raw.insert(tags::MAKE, TagValue::Text("TestCam".to_string()));
            raw.insert(tags::GPS_INFO, TagValue::SubTable(stripped));

            let metadata = MetadataExtractor::extract(&raw, TagDictionary::standard());
            assert_eq!(metadata.get("GPSInfo"), None, "key {} missing", missing);
            // The rest of the table is unaffected
            assert!(metadata.get("Make").is_some());
        }
    }

    #[test]
    fn test_gps_value_of_wrong_kind_emits_nothing() {
        let mut raw = RawTagTable::new();
        raw.insert(tags::GPS_INFO, TagValue::Integer(0));

        let metadata = MetadataExtractor::extract(&raw, TagDictionary::standard());
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_binary_payloads_are_dropped() {
        let mut raw = RawTagTable::new();
        raw.insert(tags::MAKE, TagValue::Text("TestCam".to_string()));
        raw.insert(tags::MAKER_NOTE, TagValue::Bytes(vec![0xDE, 0xAD, 0xBE, 0xEF]));

        let metadata = MetadataExtractor::extract(&raw, TagDictionary::standard());

        assert_eq!(metadata.get("MakerNote"), None);
        assert_eq!(metadata.len(), 1);
    }

    #[test]
    fn test_unknown_tag_codes_are_dropped() {
        let mut raw = RawTagTable::new();
        raw.insert(0xFFFE, TagValue::Text("mystery".to_string()));

        let metadata = MetadataExtractor::extract(&raw, TagDictionary::standard());
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_values_pass_through_unchanged() {
        let mut raw = RawTagTable::new();
        raw.insert(tags::MAKE, TagValue::Text("TestCam".to_string()));
        raw.insert(tags::ORIENTATION, TagValue::Integer(1));
        raw.insert(tags::F_NUMBER, TagValue::Float(1.8));
        raw.insert(tags::X_RESOLUTION, TagValue::FloatList(vec![72.0, 72.0]));

        let metadata = MetadataExtractor::extract(&raw, TagDictionary::standard());

        assert_eq!(metadata.get("Make"), Some(&TagValue::Text("TestCam".to_string())));
        assert_eq!(metadata.get("Orientation"), Some(&TagValue::Integer(1)));
        assert_eq!(metadata.get("FNumber"), Some(&TagValue::Float(1.8)));
        assert_eq!(
            metadata.get("XResolution"),
            Some(&TagValue::FloatList(vec![72.0, 72.0]))
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let mut raw = RawTagTable::new();
        raw.insert(tags::MAKE, TagValue::Text("TestCam".to_string()));
        raw.insert(tags::GPS_INFO, full_gps_group());
        raw.insert(tags::MAKER_NOTE, TagValue::Bytes(vec![1, 2, 3]));

        let first = MetadataExtractor::extract(&raw, TagDictionary::standard());
        let second = MetadataExtractor::extract(&raw, TagDictionary::standard());

        assert_eq!(first, second);
    }

    #[test]
    fn test_entries_keep_raw_table_order() {
        let mut raw = RawTagTable::new();
        raw.insert(tags::MODEL, TagValue::Text("X100".to_string()));
        raw.insert(tags::MAKE, TagValue::Text("TestCam".to_string()));

        let metadata = MetadataExtractor::extract(&raw, TagDictionary::standard());
        let names: Vec<&str> = metadata.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Model", "Make"]);
    }

    #[test]
    fn test_custom_dictionary_controls_names() {
        let dictionary =
            TagDictionary::from_str("[tag_ids]\n271 = \"Manufacturer\"\n").unwrap();

        let mut raw = RawTagTable::new();
        raw.insert(tags::MAKE, TagValue::Text("TestCam".to_string()));
        raw.insert(tags::MODEL, TagValue::Text("X100".to_string()));

        let metadata = MetadataExtractor::extract(&raw, &dictionary);
        assert!(metadata.get("Manufacturer").is_some());
        assert_eq!(metadata.len(), 1);
    }
}
