mod waypoint;
pub use waypoint::Waypoint;

mod route;
pub use route::Route;

mod performance;
pub use performance::PerformanceInit;

mod fms;
pub use fms::FlightManagementState;
