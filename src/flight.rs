use crate::aircraft::AircraftId;
use crate::airport::{Airport, AirportCode};
use crate::crew::{Crew, CrewId};
use crate::employee::Roster;
use crate::error::Refusal;
use crate::flight::FlightStatus::{Cancelled, Completed, Rerouted, Scheduled};
use crate::person::PassengerId;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type FlightNumber = Arc<str>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelReason {
    WeatherAtOrigin,
    WeatherAtDestination,
    Operator(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightStatus {
    Scheduled,
    Rerouted,
    Completed,
    Cancelled(CancelReason),
}

impl FlightStatus {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Cancelled(_))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Cancelled(_) | Completed)
    }

    /// Active flights may move to any state except back to scheduled;
    /// terminal flights never move again.
    pub fn can_become(&self, next: &FlightStatus) -> bool {
        !self.is_terminal() && *next != Scheduled
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheduled => write!(f, "scheduled"),
            Rerouted => write!(f, "rerouted: technical issue"),
            Completed => write!(f, "completed"),
            Cancelled(CancelReason::WeatherAtOrigin) => write!(f, "cancelled: weather at origin"),
            Cancelled(CancelReason::WeatherAtDestination) => {
                write!(f, "cancelled: weather at destination")
            }
            Cancelled(CancelReason::Operator(reason)) => write!(f, "cancelled: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub number: FlightNumber,
    pub origin_id: AirportCode,
    pub destination_id: AirportCode,
    pub scheduled_time: NaiveDateTime,
    pub aircraft_id: AircraftId,
    crew_id: Option<CrewId>,
    passengers: Vec<PassengerId>,
    status: FlightStatus,
    diverted_from: Option<AirportCode>,
}

impl Flight {
    pub fn new(
        number: FlightNumber,
        origin_id: AirportCode,
        destination_id: AirportCode,
        scheduled_time: NaiveDateTime,
        aircraft_id: AircraftId,
    ) -> Flight {
        Flight {
            number,
            origin_id,
            destination_id,
            scheduled_time,
            aircraft_id,
            crew_id: None,
            passengers: vec![],
            status: Scheduled,
            diverted_from: None,
        }
    }

    pub fn status(&self) -> &FlightStatus {
        &self.status
    }

    pub fn crew_id(&self) -> Option<&CrewId> {
        self.crew_id.as_ref()
    }

    pub fn passengers(&self) -> &[PassengerId] {
        &self.passengers
    }

    /// Destination the flight had before an emergency diversion.
    pub fn diverted_from(&self) -> Option<&AirportCode> {
        self.diverted_from.as_ref()
    }

    /// The only place a flight's status changes.
    pub fn transition(&mut self, next: FlightStatus) -> Result<(), Refusal> {
        if !self.status.can_become(&next) {
            tracing::warn!(
                flight = %self.number,
                from = %self.status,
                to = %next,
                "transition refused"
            );
            return Err(Refusal::InvalidTransition {
                flight: self.number.clone(),
                from: self.status.clone(),
                to: next,
            });
        }
        tracing::debug!(flight = %self.number, from = %self.status, to = %next, "transition");
        self.status = next;
        Ok(())
    }

    pub fn assign_crew(&mut self, crew: &Crew, roster: &Roster) -> Result<(), Refusal> {
        if !crew.is_complete(roster) {
            return Err(Refusal::CrewIncomplete(crew.id.clone()));
        }
        self.crew_id = Some(crew.id.clone());
        Ok(())
    }

    pub fn add_passenger(&mut self, passenger: PassengerId, capacity: u32) -> Result<(), Refusal> {
        if self.passengers.contains(&passenger) {
            return Err(Refusal::AlreadyBoarded {
                passenger,
                flight: self.number.clone(),
            });
        }
        if self.passengers.len() >= capacity as usize {
            return Err(Refusal::FullyBooked(self.number.clone()));
        }
        self.passengers.push(passenger);
        Ok(())
    }

    /// Origin is checked before destination, so bad weather at both ends
    /// cancels for the origin. An airport missing from the map counts as
    /// unflyable.
    pub fn check_weather_conditions(
        &mut self,
        airports: &HashMap<AirportCode, Airport>,
    ) -> Result<bool, Refusal> {
        let feasible = |code: &AirportCode| {
            airports
                .get(code)
                .is_some_and(|ap| ap.is_flight_possible())
        };
        if !feasible(&self.origin_id) {
            self.transition(Cancelled(CancelReason::WeatherAtOrigin))?;
            return Ok(false);
        }
        if !feasible(&self.destination_id) {
            self.transition(Cancelled(CancelReason::WeatherAtDestination))?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Diverts to `fallback` no matter where the flight was headed.
    /// Returns the destination that was replaced.
    pub fn handle_emergency(&mut self, fallback: AirportCode) -> Result<AirportCode, Refusal> {
        self.transition(Rerouted)?;
        let previous = std::mem::replace(&mut self.destination_id, fallback);
        self.diverted_from.get_or_insert_with(|| previous.clone());
        Ok(previous)
    }

    pub fn execute(&mut self) -> Result<(), Refusal> {
        if self.status.is_cancelled() {
            return Err(Refusal::FlightCancelled(self.number.clone()));
        }
        if self.crew_id.is_none() {
            return Err(Refusal::NoCrewAssigned(self.number.clone()));
        }
        self.transition(Completed)
    }
}
