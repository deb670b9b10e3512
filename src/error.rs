use crate::aircraft::AircraftId;
use crate::airport::AirportCode;
use crate::crew::CrewId;
use crate::employee::EmployeeId;
use crate::flight::{FlightNumber, FlightStatus};
use crate::person::PassengerId;
use thiserror::Error;

/// Input that does not describe a valid entity or names one that does not exist.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Invalid {
    #[error("unknown airport {0}")]
    UnknownAirport(AirportCode),
    #[error("unknown aircraft {0}")]
    UnknownAircraft(AircraftId),
    #[error("unknown employee {0}")]
    UnknownEmployee(EmployeeId),
    #[error("unknown passenger ticket {0}")]
    UnknownPassenger(PassengerId),
    #[error("unknown flight {0}")]
    UnknownFlight(FlightNumber),
    #[error("unknown crew {0}")]
    UnknownCrew(CrewId),
    #[error("flight {0} already exists")]
    DuplicateFlight(FlightNumber),
    #[error("crew {0} already exists")]
    DuplicateCrew(CrewId),
    #[error("{kind} {key} is defined twice")]
    DuplicateEntry { kind: &'static str, key: String },
    #[error("aircraft {0} must seat at least one passenger")]
    ZeroCapacity(AircraftId),
    #[error("unknown weather condition '{0}'")]
    UnknownWeather(String),
    #[error("cannot read time '{0}', expected YYYY-MM-DDTHH:MM")]
    BadTime(String),
}

/// A valid request the current state does not allow. State is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Refusal {
    #[error("crew {0} is incomplete")]
    CrewIncomplete(CrewId),
    #[error("flight {0} is fully booked")]
    FullyBooked(FlightNumber),
    #[error("crew {0} already has the maximum of 2 pilots")]
    PilotSeatsFull(CrewId),
    #[error("employee {employee} is not a {expected}")]
    WrongRole {
        employee: EmployeeId,
        expected: &'static str,
    },
    #[error("employee {0} is already assigned to a crew")]
    EmployeeUnavailable(EmployeeId),
    #[error("passenger {passenger} is already booked on flight {flight}")]
    AlreadyBoarded {
        passenger: PassengerId,
        flight: FlightNumber,
    },
    #[error("pilot {name} ({employee}) is not the commander")]
    NotCommander { employee: EmployeeId, name: String },
    #[error("flight {0} is cancelled and cannot be flown")]
    FlightCancelled(FlightNumber),
    #[error("flight {0} has no crew assigned")]
    NoCrewAssigned(FlightNumber),
    #[error("flight {flight} cannot go from '{from}' to '{to}'")]
    InvalidTransition {
        flight: FlightNumber,
        from: FlightStatus,
        to: FlightStatus,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpsError {
    #[error(transparent)]
    Invalid(#[from] Invalid),
    #[error(transparent)]
    Refused(#[from] Refusal),
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("cannot read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid scenario: {0}")]
    Invalid(#[from] Invalid),
}
