//! Hotel discovery.
//!
//! The source tree has one folder per city, and one file per hotel in each city folder:
//!
//! ```text
//! src/
//! ├── london/
//! │   ├── grand_file
//! │   └── the-ritz.txt
//! └── montreal/
//!     └── reviews.csv
//! ```
//!
//! Files nested deeper than that are ignored.
//! Entries are visited in name order, so that identifiers don't depend on the filesystem.
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, error, info, warn};

use crate::error::Error;
use crate::types::Hotel;

use super::names::{country, hotel_name, title_case};

pub struct Discovery {
    root: PathBuf,
}

impl Discovery {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// list entries of `dir` in name order.
    ///
    /// Entries that can't be read are logged and skipped.
    fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let entries = std::fs::read_dir(dir)?
            .filter_map(|entry| {
                entry.map_or_else(
                    |e| {
                        error!("error reading entry of {:?}: {}", dir, e);
                        None
                    },
                    Some,
                )
            })
            .map(|entry| entry.path())
            .sorted_by(|a, b| a.file_name().cmp(&b.file_name()))
            .collect();
        Ok(entries)
    }

    /// Discover hotels, numbering them from 1.
    ///
    /// Returns [Error::Config] if the root does not exist.
    /// Cities without any file are skipped with a warning, and cities that can't be listed are logged and skipped.
    pub fn hotels(&self) -> Result<Vec<Hotel>, Error> {
        if !self.root.is_dir() {
            error!("source directory not found: {:?}", self.root);
            return Err(Error::Config(format!(
                "source directory {:?} not found. Expected layout is <src>/<city>/<hotel file>",
                self.root
            )));
        }

        let mut hotels = Vec::new();

        for city_path in Self::sorted_entries(&self.root)?
            .into_iter()
            .filter(|path| path.is_dir())
        {
            let city = match city_path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };
            info!("processing city: {}", city);

            let files: Vec<PathBuf> = match Self::sorted_entries(&city_path) {
                Ok(entries) => entries.into_iter().filter(|path| path.is_file()).collect(),
                Err(e) => {
                    error!("could not list {:?}: {}", city_path, e);
                    continue;
                }
            };

            if files.is_empty() {
                warn!("no files found in {}", city);
                continue;
            }

            let city_title = title_case(&city);
            let city_country = country(&city);

            for path in files {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let id = hotels.len() as u64 + 1;
                let hotel = Hotel::new(
                    id,
                    hotel_name(&file_name, &city),
                    city_title.clone(),
                    city_country.to_string(),
                    path,
                );
                debug!(
                    "created hotel {} (id: {}) from {}",
                    hotel.name(),
                    id,
                    file_name
                );
                hotels.push(hotel);
            }
        }

        info!("discovered {} hotels in {:?}", hotels.len(), self.root);
        Ok(hotels)
    }
}
