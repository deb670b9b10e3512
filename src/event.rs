use crate::aircraft::AircraftId;
use crate::airport::{AirportCode, Weather};
use crate::crew::CrewId;
use crate::flight::{FlightNumber, FlightStatus};
use std::fmt;

/// One line of the operations journal.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    FlightCreated {
        admin: String,
        flight: FlightNumber,
    },
    CrewFormed {
        admin: String,
        crew: CrewId,
    },
    CrewMemberAdded {
        crew: CrewId,
        role: &'static str,
        name: String,
    },
    CrewAssigned {
        crew: CrewId,
        flight: FlightNumber,
    },
    PassengerBoarded {
        name: String,
        flight: FlightNumber,
    },
    WeatherWarning {
        airport: AirportCode,
        weather: Weather,
    },
    FlightCancelled {
        flight: FlightNumber,
        status: FlightStatus,
        airport: Option<AirportCode>,
    },
    IssueReported {
        pilot: String,
        issue: String,
    },
    Emergency {
        flight: FlightNumber,
        issue: String,
    },
    Rerouted {
        flight: FlightNumber,
        from_city: String,
        to_city: String,
    },
    FlightStarted {
        flight: FlightNumber,
        route: (String, String),
        aircraft: String,
        passengers: usize,
        pilots: usize,
        attendants: usize,
    },
    TakeOff {
        model: String,
        registration: AircraftId,
    },
    Airborne {
        flight: FlightNumber,
    },
    Landing {
        model: String,
        registration: AircraftId,
    },
    FlightCompleted {
        flight: FlightNumber,
    },
    Status {
        flight: FlightNumber,
        status: FlightStatus,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::FlightCreated { admin, flight } => {
                write!(f, "administrator {} created flight {}", admin, flight)
            }
            Event::CrewFormed { admin, crew } => {
                write!(f, "administrator {} started forming crew {}", admin, crew)
            }
            Event::CrewMemberAdded { crew, role, name } => {
                write!(f, "{} {} added to crew {}", role, name, crew)
            }
            Event::CrewAssigned { crew, flight } => {
                write!(f, "crew {} assigned to flight {}", crew, flight)
            }
            Event::PassengerBoarded { name, flight } => {
                write!(f, "passenger {} added to flight {}", name, flight)
            }
            Event::WeatherWarning { airport, weather } => {
                write!(f, "warning! weather at {} deteriorating: {}", airport, weather)
            }
            Event::FlightCancelled {
                flight,
                status,
                airport: Some(airport),
            } => write!(f, "flight {} {} ({})", flight, status, airport),
            Event::FlightCancelled {
                flight,
                status,
                airport: None,
            } => write!(f, "flight {} {}", flight, status),
            Event::IssueReported { pilot, issue } => {
                write!(f, "COMMANDER {} reports a technical issue: {}", pilot, issue)
            }
            Event::Emergency { flight, issue } => {
                write!(f, "EMERGENCY on flight {}: {}", flight, issue)
            }
            Event::Rerouted {
                flight,
                from_city,
                to_city,
            } => write!(
                f,
                "flight {} rerouted: {} -> {} (emergency landing)",
                flight, from_city, to_city
            ),
            Event::FlightStarted {
                flight,
                route,
                aircraft,
                passengers,
                pilots,
                attendants,
            } => {
                writeln!(f, "{}", "=".repeat(60))?;
                writeln!(f, "EXECUTING FLIGHT {}", flight)?;
                writeln!(f, "{}", "=".repeat(60))?;
                writeln!(f, "route: {} -> {}", route.0, route.1)?;
                writeln!(f, "{}", aircraft)?;
                writeln!(f, "passengers: {}", passengers)?;
                write!(
                    f,
                    "crew: {} pilots, {} flight attendants",
                    pilots, attendants
                )
            }
            Event::TakeOff {
                model,
                registration,
            } => write!(f, "aircraft {} ({}) takes off", model, registration),
            Event::Airborne { flight } => write!(f, "flight {} is airborne...", flight),
            Event::Landing {
                model,
                registration,
            } => write!(f, "aircraft {} ({}) lands", model, registration),
            Event::FlightCompleted { flight } => {
                write!(f, "flight {} completed successfully", flight)
            }
            Event::Status { flight, status } => {
                write!(f, "flight {} status: {}", flight, status)
            }
        }
    }
}
