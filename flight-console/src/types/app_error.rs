use std::fmt;

/// Represents errors that can occur in the flight console application.
///
/// The model layer itself cannot fail; everything here is about operator
/// input or the environment around the console.
#[derive(Debug)]
pub enum AppError {
    InvalidInput,
    AirportNotFound(String), // If an IATA code is not in the catalog
    InvalidWeight(String),   // Non-positive fuel or zero-fuel weight
    Catalog(String),         // Problems loading the airport catalog
    Log(String),             // Problems setting up or writing the log
    Animation(String),       // Problems running the frame timer
}

/// Implement the Display trait for user-friendly error messages
impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput => {
                write!(f, "Invalid input. Please check your input and try again.")
            }
            AppError::AirportNotFound(ref iata_code) => {
                write!(f, "Airport not found: {}", iata_code)
            }
            AppError::InvalidWeight(ref field) => {
                write!(f, "Please enter a value greater than zero for the {}.", field)
            }
            AppError::Catalog(msg) => write!(f, "Airport catalog error: {}", msg),
            AppError::Log(msg) => write!(f, "Logging error: {}", msg),
            AppError::Animation(msg) => write!(f, "Animation error: {}", msg),
        }
    }
}
