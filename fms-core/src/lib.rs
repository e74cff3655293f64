pub mod animation;
pub mod types;

pub use animation::frame_marker;
pub use types::{FlightManagementState, PerformanceInit, Route, Waypoint};
