use fms_core::{FlightManagementState, Route, Waypoint};

use super::app_error::AppError;
use super::catalog::AirportCatalog;

// Planning figures programmed for every demo flight
const DEFAULT_COST_INDEX: f64 = 30.0;
const DEFAULT_RESERVES_TONNES: f64 = 2.5;
const DEFAULT_FLIGHT_LEVEL: f64 = 380.0;
const DEFAULT_TRANSITION_ALTITUDE_FT: f64 = 5000.0;

/// Enroute fixes of the demo route. Every flight is routed through the same
/// three VORs regardless of the airport pair.
const ENROUTE_FIXES: [(&str, f64, f64); 3] = [
    ("VOR1", 34.1, -6.1),
    ("VOR2", 35.0, -5.0),
    ("VOR3", 36.0, -4.0),
];

/// Everything the operator enters before a flight can start. Built once from
/// the console prompts and passed around immutably.

#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlanRequest {
    pub departure: String,
    pub arrival: String,
    pub total_fuel: f64,
    pub zero_fuel_weight: f64,
}

impl FlightPlanRequest {
    pub fn new(
        departure: String,
        arrival: String,
        total_fuel: f64,
        zero_fuel_weight: f64,
    ) -> Self {
        FlightPlanRequest {
            departure,
            arrival,
            total_fuel,
            zero_fuel_weight,
        }
    }

    /// Rejects what the model layer would silently accept: missing airport
    /// codes and non-positive weights. Cost index, reserves, flight level
    /// and transition altitude are programmed constants and stay unchecked.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.departure.trim().is_empty() || self.arrival.trim().is_empty() {
            return Err(AppError::InvalidInput);
        }
        if self.total_fuel <= 0.0 {
            return Err(AppError::InvalidWeight("total fuel".to_string()));
        }
        if self.zero_fuel_weight <= 0.0 {
            return Err(AppError::InvalidWeight("zero-fuel weight".to_string()));
        }
        Ok(())
    }
}

/// Builds the flight management state for a request: the route runs from the
/// departure airport through the demo fixes to the arrival airport, and the
/// performance block is programmed with the demo figures plus the requested
/// weights.
pub fn prepare_flight(
    request: &FlightPlanRequest,
    catalog: &AirportCatalog,
) -> Result<FlightManagementState, AppError> {
    request.validate()?;

    let origin = catalog
        .get(&request.departure)
        .ok_or_else(|| AppError::AirportNotFound(request.departure.clone()))?
        .to_waypoint();
    let destination = catalog
        .get(&request.arrival)
        .ok_or_else(|| AppError::AirportNotFound(request.arrival.clone()))?
        .to_waypoint();

    let mut route = Route::new(origin, destination);
    for (name, latitude, longitude) in ENROUTE_FIXES {
        route.add_waypoint(Waypoint::new(name.to_string(), latitude, longitude));
    }

    let mut fms = FlightManagementState::new();
    fms.set_route(route);
    fms.configure_performance(
        DEFAULT_COST_INDEX,
        DEFAULT_RESERVES_TONNES,
        request.zero_fuel_weight,
        request.total_fuel,
        DEFAULT_FLIGHT_LEVEL,
        DEFAULT_TRANSITION_ALTITUDE_FT,
    );

    Ok(fms)
}

#[cfg(test)]
mod tests {
    use super::{prepare_flight, FlightPlanRequest};
    use crate::types::airport::Airport;
    use crate::types::app_error::AppError;
    use crate::types::catalog::AirportCatalog;

    fn demo_catalog() -> AirportCatalog {
        AirportCatalog::from_airports(vec![
            Airport::new(
                "CMN".to_string(),
                "MAR".to_string(),
                "Mohammed V International Airport".to_string(),
                33.367,
                -7.590,
            ),
            Airport::new(
                "MAD".to_string(),
                "ESP".to_string(),
                "Adolfo Suarez Madrid-Barajas Airport".to_string(),
                40.472,
                -3.561,
            ),
        ])
    }

    #[test]
    fn rejects_empty_airport_selection() {
        let request = FlightPlanRequest::new("".to_string(), "MAD".to_string(), 10.0, 60.0);
        assert!(matches!(request.validate(), Err(AppError::InvalidInput)));
    }

    #[test]
    fn rejects_non_positive_weights() {
        let request = FlightPlanRequest::new("CMN".to_string(), "MAD".to_string(), 0.0, 60.0);
        assert!(matches!(
            request.validate(),
            Err(AppError::InvalidWeight(_))
        ));

        let request = FlightPlanRequest::new("CMN".to_string(), "MAD".to_string(), 10.0, -60.0);
        assert!(matches!(
            request.validate(),
            Err(AppError::InvalidWeight(_))
        ));
    }

    #[test]
    fn unknown_airport_is_reported_by_code() {
        let request = FlightPlanRequest::new("CMN".to_string(), "XXX".to_string(), 10.0, 60.0);
        match prepare_flight(&request, &demo_catalog()) {
            Err(AppError::AirportNotFound(code)) => assert_eq!(code, "XXX"),
            other => panic!("Expected AirportNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn prepared_flight_has_route_and_performance() {
        let request = FlightPlanRequest::new("CMN".to_string(), "MAD".to_string(), 10.0, 60.0);
        let fms = prepare_flight(&request, &demo_catalog()).expect("Failed to prepare flight");

        let coords = fms.route.coordinates();
        assert_eq!(coords.len(), 5); // origin + three fixes + destination
        assert_eq!(coords[0], (33.367, -7.590));
        assert_eq!(coords[1], (34.1, -6.1));
        assert_eq!(coords[2], (35.0, -5.0));
        assert_eq!(coords[3], (36.0, -4.0));
        assert_eq!(coords[4], (40.472, -3.561));

        assert_eq!(fms.route.origin.name, "CMN");
        assert_eq!(fms.route.destination.name, "MAD");

        assert_eq!(fms.performance.cost_index, 30.0);
        assert_eq!(fms.performance.reserves, 2.5);
        assert_eq!(fms.performance.zero_fuel_weight, 60.0);
        assert_eq!(fms.performance.total_fuel, 10.0);
        assert_eq!(fms.performance.optimum_flight_level, 380.0);
        assert_eq!(fms.performance.transition_altitude, 5000.0);
        assert_eq!(fms.performance.gross_weight(), 70.0);
    }

    #[test]
    fn same_departure_and_arrival_is_accepted() {
        let request = FlightPlanRequest::new("CMN".to_string(), "CMN".to_string(), 10.0, 60.0);
        let fms = prepare_flight(&request, &demo_catalog()).expect("Failed to prepare flight");
        assert_eq!(fms.route.coordinates().len(), 5);
    }
}
