use std::fmt;

/// A named geographic point used as a route vertex.
///
/// Coordinates are plain degrees and are taken as given: the caller decides
/// what counts as a valid latitude or longitude.

#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Waypoint {
    pub fn new(name: String, latitude: f64, longitude: f64) -> Self {
        Waypoint {
            name,
            latitude,
            longitude,
        }
    }

    /// Returns the `(latitude, longitude)` pair of this vertex.
    pub fn coordinate(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl Default for Waypoint {
    fn default() -> Self {
        Waypoint {
            name: "Unknown".to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.latitude, self.longitude)
    }
}
