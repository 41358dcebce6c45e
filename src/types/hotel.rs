use std::path::{Path, PathBuf};

use serde::Serialize;

/// A lodging entity, backed by exactly one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    id: u64,
    name: String,
    city: String,
    country: String,
    source_path: PathBuf,
}

/// Serialized form of a [Hotel] in the hotel table.
#[derive(Debug, Serialize)]
pub struct HotelRow<'a> {
    #[serde(rename = "HOTELID")]
    pub hotel_id: u64,
    #[serde(rename = "NAME")]
    pub name: &'a str,
    #[serde(rename = "CITY")]
    pub city: &'a str,
    #[serde(rename = "COUNTRY")]
    pub country: &'a str,
}

impl Hotel {
    pub fn new(id: u64, name: String, city: String, country: String, source_path: PathBuf) -> Self {
        Self {
            id,
            name,
            city,
            country,
            source_path,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Name of the source file, lossily converted.
    pub fn file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn row(&self) -> HotelRow<'_> {
        HotelRow {
            hotel_id: self.id,
            name: &self.name,
            city: &self.city,
            country: &self.country,
        }
    }
}
