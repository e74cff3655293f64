use super::performance::PerformanceInit;
use super::route::Route;

/// The flight management state: one active route plus one performance block.
///
/// A fresh instance holds a placeholder route between two unknown vertices
/// and an all-zero performance block; starting a flight replaces the route
/// wholesale and programs the performance figures in one call.

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlightManagementState {
    pub route: Route,
    pub performance: PerformanceInit,
}

impl FlightManagementState {
    pub fn new() -> Self {
        FlightManagementState::default()
    }

    /// Replaces the active route. The previous route is discarded.
    pub fn set_route(&mut self, route: Route) {
        self.route = route;
    }

    /// Programs all six performance figures at once. Prior values are fully
    /// overwritten; any real value is accepted.
    pub fn configure_performance(
        &mut self,
        cost_index: f64,
        reserves: f64,
        zero_fuel_weight: f64,
        total_fuel: f64,
        optimum_flight_level: f64,
        transition_altitude: f64,
    ) {
        self.performance.cost_index = cost_index;
        self.performance.reserves = reserves;
        self.performance.zero_fuel_weight = zero_fuel_weight;
        self.performance.total_fuel = total_fuel;
        self.performance.optimum_flight_level = optimum_flight_level;
        self.performance.transition_altitude = transition_altitude;
    }
}
