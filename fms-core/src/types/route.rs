use super::waypoint::Waypoint;

/// An ordered path from an origin through zero or more enroute fixes to a
/// destination. The route owns its waypoints; appending is the only mutation.

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub waypoints: Vec<Waypoint>,
}

impl Route {
    /// Creates a route with no enroute fixes yet.
    pub fn new(origin: Waypoint, destination: Waypoint) -> Self {
        Route {
            origin,
            destination,
            waypoints: Vec::new(),
        }
    }

    /// Appends a fix to the end of the enroute sequence. Duplicates are
    /// accepted as-is; insertion order is preserved.
    pub fn add_waypoint(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// Returns the full `(latitude, longitude)` path: origin, each enroute
    /// fix in insertion order, destination. Recomputed on every call.
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        let mut coords = vec![self.origin.coordinate()];
        for wp in &self.waypoints {
            coords.push(wp.coordinate());
        }
        coords.push(self.destination.coordinate());
        coords
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::new(Waypoint::default(), Waypoint::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{Route, Waypoint};

    fn fix(name: &str, lat: f64, lon: f64) -> Waypoint {
        Waypoint::new(name.to_string(), lat, lon)
    }

    #[test]
    fn coordinates_without_fixes() {
        let route = Route::new(fix("CMN", 34.0, -6.0), fix("MAD", 36.0, -4.0));
        assert_eq!(route.coordinates(), vec![(34.0, -6.0), (36.0, -4.0)]);
    }

    #[test]
    fn coordinates_keep_insertion_order() {
        let mut route = Route::new(fix("CMN", 34.0, -6.0), fix("MAD", 36.0, -4.0));
        route.add_waypoint(fix("VOR1", 34.1, -6.1));
        route.add_waypoint(fix("VOR2", 35.0, -5.0));
        route.add_waypoint(fix("VOR3", 36.0, -4.0));

        assert_eq!(
            route.coordinates(),
            vec![
                (34.0, -6.0),
                (34.1, -6.1),
                (35.0, -5.0),
                (36.0, -4.0),
                (36.0, -4.0)
            ]
        );
        assert_eq!(route.coordinates().len(), route.waypoints.len() + 2);
    }

    #[test]
    fn duplicate_fixes_are_kept() {
        let mut route = Route::new(fix("CMN", 34.0, -6.0), fix("MAD", 36.0, -4.0));
        let vor = fix("VOR1", 34.1, -6.1);
        route.add_waypoint(vor.clone());
        route.add_waypoint(vor);

        assert_eq!(
            route.coordinates(),
            vec![(34.0, -6.0), (34.1, -6.1), (34.1, -6.1), (36.0, -4.0)]
        );
    }

    #[test]
    fn default_route_is_the_placeholder_path() {
        let route = Route::default();
        assert_eq!(route.coordinates(), vec![(0.0, 0.0), (0.0, 0.0)]);
    }
}
