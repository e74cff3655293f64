use fms_core::Waypoint;
use serde::Deserialize;

/// Represents a selectable airport: one row of the catalog CSV, with its
/// IATA code, country, name and geographical position.

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Airport {
    pub iata_code: String,
    pub country: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn new(
        iata_code: String,
        country: String,
        name: String,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Airport {
            iata_code,
            country,
            name,
            latitude,
            longitude,
        }
    }

    /// The route vertex for this airport, named by its IATA code.
    pub fn to_waypoint(&self) -> Waypoint {
        Waypoint::new(self.iata_code.clone(), self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::Airport;

    #[test]
    fn waypoint_carries_code_and_position() {
        let airport = Airport::new(
            "CMN".to_string(),
            "MAR".to_string(),
            "Mohammed V International Airport".to_string(),
            33.367,
            -7.590,
        );
        let wp = airport.to_waypoint();
        assert_eq!(wp.name, "CMN");
        assert_eq!(wp.latitude, 33.367);
        assert_eq!(wp.longitude, -7.590);
    }
}
