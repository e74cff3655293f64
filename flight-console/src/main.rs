mod types;

use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;
use fms_core::{frame_marker, FlightManagementState};
use logger::{Color, Logger};
use types::app_error::AppError;
use types::catalog::AirportCatalog;
use types::flight_plan::{prepare_flight, FlightPlanRequest};
use types::frame_timer::FrameTimer;

const DEFAULT_AIRPORTS_CSV: &str = "flight-console/data/airports.csv";
const LOG_DIR: &str = "logs";

fn clean_scr() {
    print!("\x1B[2J\x1B[1;1H");
    io::stdout().flush().unwrap();
}

fn prompt_input(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().unwrap();
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input.trim().to_string()
}

fn start_flight(
    catalog: &AirportCatalog,
    logger: &Logger,
) -> Result<FlightManagementState, AppError> {
    clean_scr();
    let departure = prompt_input("Enter the departure airport IATA code: ");
    let arrival = prompt_input("Enter the arrival airport IATA code: ");

    let fuel_input = prompt_input("Enter the total fuel (in tonnes): ");
    let total_fuel: f64 = match fuel_input.parse() {
        Ok(fuel) => fuel,
        Err(_) => return Err(AppError::InvalidInput),
    };

    let zfw_input = prompt_input("Enter the zero-fuel weight (in tonnes): ");
    let zero_fuel_weight: f64 = match zfw_input.parse() {
        Ok(zfw) => zfw,
        Err(_) => return Err(AppError::InvalidInput),
    };

    let request = FlightPlanRequest::new(departure, arrival, total_fuel, zero_fuel_weight);
    let fms = prepare_flight(&request, catalog)?;

    show_flight_summary(&request, &fms);
    logger
        .info(
            &format!(
                "Flight {} -> {} prepared, gross weight {:.2} tonnes.",
                request.departure,
                request.arrival,
                fms.performance.gross_weight()
            ),
            Color::Green,
            false,
        )
        .map_err(|e| AppError::Log(e.to_string()))?;

    animate_route(&fms, logger)?;

    Ok(fms)
}

fn show_flight_summary(request: &FlightPlanRequest, fms: &FlightManagementState) {
    let perf = &fms.performance;
    println!("\nFlight prepared successfully:");
    println!("Departure: {}", fms.route.origin);
    println!("Arrival: {}", fms.route.destination);
    println!("Fuel: {:.2} tonnes", request.total_fuel);
    println!("ZFW: {:.2} tonnes", request.zero_fuel_weight);
    println!("Gross weight: {:.2} tonnes", perf.gross_weight());
    println!(
        "Cost index: {} | Reserves: {} tonnes | FL{} | Transition altitude: {} ft",
        perf.cost_index, perf.reserves, perf.optimum_flight_level, perf.transition_altitude
    );
    println!(
        "Prepared at {}",
        Utc::now().naive_local().format("%d-%m-%Y %H:%M:%S")
    );
}

fn animate_route(fms: &FlightManagementState, logger: &Logger) -> Result<(), AppError> {
    let coords = fms.route.coordinates();
    let total_frames = coords.len();

    println!("\nFlight progress:");
    let timer = FrameTimer::new();
    let handle = timer.start(total_frames, move |frame| {
        if let Some((latitude, longitude)) = frame_marker(&coords, frame) {
            println!(
                "  frame {:>2}: aircraft at ({:.4}, {:.4})",
                frame + 1,
                latitude,
                longitude
            );
        }
    })?;

    handle
        .join()
        .map_err(|_| AppError::Animation("Frame timer thread panicked.".to_string()))?;
    println!("Aircraft arrived at destination.");

    logger
        .info("Route animation finished.", Color::Cyan, false)
        .map_err(|e| AppError::Log(e.to_string()))?;

    Ok(())
}

fn list_airports(catalog: &AirportCatalog) {
    if catalog.is_empty() {
        println!("No airports available.");
        return;
    }

    println!(
        "\n{:<10} {:<8} {:<40} {:<10} {:<10}",
        "IATA Code", "Country", "Airport Name", "Latitude", "Longitude"
    );
    for airport in catalog.list() {
        println!(
            "{:<10} {:<8} {:<40} {:<10.3} {:<10.3}",
            airport.iata_code, airport.country, airport.name, airport.latitude, airport.longitude
        );
    }
}

fn show_route(last_flight: &Option<FlightManagementState>) {
    match last_flight {
        Some(fms) => {
            println!(
                "\nRoute {} -> {}:",
                fms.route.origin.name, fms.route.destination.name
            );
            println!("{:<12} {:<12}", "Latitude", "Longitude");
            for (latitude, longitude) in fms.route.coordinates() {
                println!("{:<12.4} {:<12.4}", latitude, longitude);
            }
        }
        None => println!("No flight started yet. Use start-flight first."),
    }
}

fn main() -> Result<(), AppError> {
    let catalog_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_AIRPORTS_CSV.to_string());
    let catalog = AirportCatalog::from_csv_path(Path::new(&catalog_path))?;

    let logger =
        Logger::new(Path::new(LOG_DIR), "flight_console").map_err(|e| AppError::Log(e.to_string()))?;

    let mut last_flight: Option<FlightManagementState> = None;

    loop {
        println!("Enter command (type '-h' or 'help' for options): ");
        let mut command = String::new();
        io::stdin()
            .read_line(&mut command)
            .expect("Failed to read input");

        let args: Vec<&str> = command.split_whitespace().collect();
        if args.is_empty() {
            continue;
        }

        match args[0] {
            "start-flight" => match start_flight(&catalog, &logger) {
                Ok(fms) => last_flight = Some(fms),
                Err(e) => {
                    let _ = logger.error(&e.to_string(), false);
                    println!("{}", e);
                }
            },

            "list-airports" => {
                list_airports(&catalog);
            }

            "show-route" => {
                show_route(&last_flight);
            }

            "-h" | "help" => print_help(),

            "exit" => break,

            _ => eprintln!("Invalid command. Use -h for help."),
        }
    }

    Ok(())
}

fn print_help() {
    clean_scr();
    println!("Available commands:");
    println!("  start-flight");
    println!("    Prepares a new flight. You'll be prompted for each detail.");
    println!("  list-airports");
    println!("    Show the selectable airports.");
    println!("  show-route");
    println!("    Show the coordinate path of the last prepared flight.");
    println!("  exit");
    println!("    Closes this application.");
}
