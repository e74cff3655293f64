const FRAME_INTERVAL_MILLIS: u64 = 200;

pub mod airport;

pub mod app_error;

pub mod catalog;

pub mod flight_plan;

pub mod frame_timer;
