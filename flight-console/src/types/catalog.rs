use std::collections::HashMap;
use std::path::Path;

use super::airport::Airport;
use super::app_error::AppError;

/// The set of selectable airports, keyed by IATA code and loaded once at
/// startup from a CSV catalog file.
pub struct AirportCatalog {
    airports: HashMap<String, Airport>,
}

impl AirportCatalog {
    /// Loads the catalog from a CSV file with an
    /// `iata_code,country,name,latitude,longitude` header row.
    pub fn from_csv_path(path: &Path) -> Result<Self, AppError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            AppError::Catalog(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let mut airports = Vec::new();
        for record in reader.deserialize() {
            let airport: Airport =
                record.map_err(|e| AppError::Catalog(format!("Malformed airport row: {}", e)))?;
            airports.push(airport);
        }

        Ok(Self::from_airports(airports))
    }

    /// Builds a catalog from already-loaded airports. Duplicate IATA codes
    /// keep the last entry.
    pub fn from_airports(airports: impl IntoIterator<Item = Airport>) -> Self {
        let mut map = HashMap::new();
        for airport in airports {
            map.insert(airport.iata_code.clone(), airport);
        }
        AirportCatalog { airports: map }
    }

    pub fn get(&self, iata_code: &str) -> Option<&Airport> {
        self.airports.get(iata_code)
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Returns the airports sorted by IATA code for stable console output.
    pub fn list(&self) -> Vec<&Airport> {
        let mut all: Vec<&Airport> = self.airports.values().collect();
        all.sort_by(|a, b| a.iata_code.cmp(&b.iata_code));
        all
    }
}
