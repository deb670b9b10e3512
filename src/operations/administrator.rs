use crate::aircraft::{Aircraft, Flyable};
use crate::airport::{Airport, Weather};
use crate::crew::{Crew, CrewId};
use crate::employee::{Duty, Employee, EmployeeId};
use crate::error::{Invalid, OpsError, Refusal, ScenarioError};
use crate::event::Event;
use crate::flight::{CancelReason, Flight, FlightNumber, FlightStatus};
use crate::operations::registry::Registry;
use crate::person::{Passenger, Role};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Creates flights and crews, wires them together and drives every flight
/// status change. Whatever happens is written to the journal.
pub struct Administrator {
    pub name: String,
    pub admin_id: String,
    pub registry: Registry,
    pub flights: Vec<Flight>,
    flights_index: HashMap<FlightNumber, usize>,
    pub crews: Vec<Crew>,
    journal: Vec<Event>,
}

impl Administrator {
    pub fn new(name: &str, admin_id: &str, registry: Registry) -> Administrator {
        Administrator {
            name: name.to_string(),
            admin_id: admin_id.to_string(),
            registry,
            flights: vec![],
            flights_index: HashMap::new(),
            crews: vec![],
            journal: vec![],
        }
    }

    pub fn load_from_file(path: &str) -> Result<Self, ScenarioError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ScenarioError> {
        #[derive(Deserialize)]
        struct RawAdministrator {
            name: String,
            id: String,
        }
        #[derive(Deserialize)]
        struct RawData {
            administrator: RawAdministrator,
            airports: Vec<Airport>,
            aircraft: Vec<Aircraft>,
            employees: Vec<Employee>,
            #[serde(default)]
            passengers: Vec<Passenger>,
        }
        let raw: RawData = serde_json::from_str(data)?;
        let registry = Registry::new(raw.airports, raw.aircraft, raw.employees, raw.passengers)?;
        tracing::debug!(
            airports = registry.airports.len(),
            aircraft = registry.aircraft.len(),
            employees = registry.employees.len(),
            passengers = registry.passengers.len(),
            "scenario loaded"
        );
        Ok(Administrator::new(
            &raw.administrator.name,
            &raw.administrator.id,
            registry,
        ))
    }

    fn record(&mut self, event: Event) {
        tracing::info!("{}", event);
        self.journal.push(event);
    }

    #[cfg(test)]
    pub fn journal(&self) -> &[Event] {
        &self.journal
    }

    pub fn drain_journal(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.journal)
    }

    fn flight_idx(&self, number: &str) -> Result<usize, Invalid> {
        self.flights_index
            .get(number)
            .copied()
            .ok_or_else(|| Invalid::UnknownFlight(Arc::from(number)))
    }

    fn crew_idx(&self, crew_id: &str) -> Result<usize, Invalid> {
        self.crews
            .iter()
            .position(|c| *c.id == *crew_id)
            .ok_or_else(|| Invalid::UnknownCrew(Arc::from(crew_id)))
    }

    pub fn flight(&self, number: &str) -> Result<&Flight, Invalid> {
        self.flight_idx(number).map(|i| &self.flights[i])
    }

    pub fn crew(&self, crew_id: &str) -> Result<&Crew, Invalid> {
        self.crew_idx(crew_id).map(|i| &self.crews[i])
    }

    /// An employee is free until some crew references them.
    pub fn is_available(&self, employee_id: &EmployeeId) -> bool {
        !self.crews.iter().any(|c| c.contains(employee_id))
    }

    pub fn create_flight(
        &mut self,
        number: &str,
        departure: &str,
        destination: &str,
        time: NaiveDateTime,
        aircraft: &str,
    ) -> Result<&Flight, OpsError> {
        if self.flights_index.contains_key(number) {
            return Err(Invalid::DuplicateFlight(Arc::from(number)).into());
        }
        let origin_id = self.registry.airport(departure)?.code.clone();
        let destination_id = self.registry.airport(destination)?.code.clone();
        let aircraft_id = self.registry.aircraft(aircraft)?.registration.clone();

        let number: FlightNumber = Arc::from(number);
        self.flights.push(Flight::new(
            number.clone(),
            origin_id,
            destination_id,
            time,
            aircraft_id,
        ));
        let idx = self.flights.len() - 1;
        self.flights_index.insert(number.clone(), idx);
        self.record(Event::FlightCreated {
            admin: self.name.clone(),
            flight: number,
        });
        Ok(&self.flights[idx])
    }

    pub fn form_crew(&mut self, crew_id: &str) -> Result<&Crew, OpsError> {
        if self.crew_idx(crew_id).is_ok() {
            return Err(Invalid::DuplicateCrew(Arc::from(crew_id)).into());
        }
        let crew_id: CrewId = Arc::from(crew_id);
        self.crews.push(Crew::new(crew_id.clone()));
        self.record(Event::CrewFormed {
            admin: self.name.clone(),
            crew: crew_id,
        });
        Ok(&self.crews[self.crews.len() - 1])
    }

    fn seat(
        &mut self,
        crew_id: &str,
        employee_id: &str,
        place: impl FnOnce(&mut Crew, &Employee) -> Result<Option<EmployeeId>, Refusal>,
    ) -> Result<(), OpsError> {
        let idx = self.crew_idx(crew_id)?;
        let employee = self.registry.employee(employee_id)?;
        if self.crews.iter().any(|c| c.contains(&employee.employee_id)) {
            return Err(Refusal::EmployeeUnavailable(employee.employee_id.clone()).into());
        }
        let crew = &mut self.crews[idx];
        if let Some(released) = place(crew, employee)? {
            tracing::info!(
                crew = %crew.id,
                employee = %released,
                "seat taken over, employee released"
            );
        }
        let event = Event::CrewMemberAdded {
            crew: crew.id.clone(),
            role: Crew::label_of(employee),
            name: employee.name().to_string(),
        };
        self.record(event);
        Ok(())
    }

    pub fn add_pilot(&mut self, crew_id: &str, employee_id: &str) -> Result<(), OpsError> {
        self.seat(crew_id, employee_id, |crew, e| crew.add_pilot(e).map(|_| None))
    }

    pub fn set_navigator(&mut self, crew_id: &str, employee_id: &str) -> Result<(), OpsError> {
        self.seat(crew_id, employee_id, |crew, e| crew.set_navigator(e))
    }

    pub fn set_radio_operator(&mut self, crew_id: &str, employee_id: &str) -> Result<(), OpsError> {
        self.seat(crew_id, employee_id, |crew, e| crew.set_radio_operator(e))
    }

    pub fn add_flight_attendant(
        &mut self,
        crew_id: &str,
        employee_id: &str,
    ) -> Result<(), OpsError> {
        self.seat(crew_id, employee_id, |crew, e| {
            crew.add_flight_attendant(e).map(|_| None)
        })
    }

    /// Puts an employee in the slot matching their duty.
    pub fn enlist(&mut self, crew_id: &str, employee_id: &str) -> Result<(), OpsError> {
        let duty = self.registry.employee(employee_id)?.duty.clone();
        match duty {
            Duty::Pilot { .. } => self.add_pilot(crew_id, employee_id),
            Duty::Navigator { .. } => self.set_navigator(crew_id, employee_id),
            Duty::RadioOperator { .. } => self.set_radio_operator(crew_id, employee_id),
            Duty::FlightAttendant { .. } => self.add_flight_attendant(crew_id, employee_id),
        }
    }

    pub fn assign_crew_to_flight(&mut self, crew_id: &str, number: &str) -> Result<(), OpsError> {
        let crew_idx = self.crew_idx(crew_id)?;
        let flight_idx = self.flight_idx(number)?;
        let crew = &self.crews[crew_idx];
        self.flights[flight_idx].assign_crew(crew, &self.registry.employees)?;
        let event = Event::CrewAssigned {
            crew: crew.id.clone(),
            flight: self.flights[flight_idx].number.clone(),
        };
        self.record(event);
        Ok(())
    }

    pub fn add_passenger(&mut self, number: &str, ticket: &str) -> Result<(), OpsError> {
        let idx = self.flight_idx(number)?;
        let passenger = self.registry.passenger(ticket)?;
        if let Some(booked) = self
            .flights
            .iter()
            .find(|f| f.passengers().contains(&passenger.ticket_number))
        {
            return Err(Refusal::AlreadyBoarded {
                passenger: passenger.ticket_number.clone(),
                flight: booked.number.clone(),
            }
            .into());
        }
        let capacity = self.registry.aircraft(&self.flights[idx].aircraft_id)?.capacity;
        self.flights[idx].add_passenger(passenger.ticket_number.clone(), capacity)?;
        let event = Event::PassengerBoarded {
            name: passenger.name().to_string(),
            flight: self.flights[idx].number.clone(),
        };
        self.record(event);
        Ok(())
    }

    pub fn set_weather(&mut self, code: &str, weather: Weather) -> Result<(), OpsError> {
        let warning = self.registry.airport_mut(code)?.set_weather(weather);
        if let Some(warning) = warning {
            self.record(warning);
        }
        Ok(())
    }

    pub fn check_weather(&mut self, number: &str) -> Result<bool, OpsError> {
        let idx = self.flight_idx(number)?;
        let flight = &mut self.flights[idx];
        if flight.check_weather_conditions(&self.registry.airports)? {
            return Ok(true);
        }
        let airport = match flight.status() {
            FlightStatus::Cancelled(CancelReason::WeatherAtOrigin) => {
                flight.origin_id.clone()
            }
            _ => flight.destination_id.clone(),
        };
        let event = Event::FlightCancelled {
            flight: flight.number.clone(),
            status: flight.status().clone(),
            airport: Some(airport),
        };
        self.record(event);
        Ok(false)
    }

    /// A pilot raises a technical issue on a flight. Only the commander's
    /// report diverts the flight; anyone else is refused and nothing moves.
    pub fn report_technical_issue(
        &mut self,
        pilot_id: &str,
        number: &str,
        issue: &str,
    ) -> Result<(), OpsError> {
        let idx = self.flight_idx(number)?;
        let pilot = self.registry.employee(pilot_id)?;
        pilot.report_technical_issue(issue)?;
        let event = Event::IssueReported {
            pilot: pilot.name().to_string(),
            issue: issue.to_string(),
        };
        self.record(event);
        self.handle_emergency(idx, issue)
    }

    fn handle_emergency(&mut self, idx: usize, issue: &str) -> Result<(), OpsError> {
        let fallback = self.registry.fallback_airport();
        let flight = &mut self.flights[idx];
        let previous = flight.handle_emergency(fallback)?;
        let number = flight.number.clone();
        let to_city = self.registry.city_of(&flight.destination_id);
        let from_city = self.registry.city_of(&previous);
        self.record(Event::Emergency {
            flight: number.clone(),
            issue: issue.to_string(),
        });
        self.record(Event::Rerouted {
            flight: number,
            from_city,
            to_city,
        });
        Ok(())
    }

    pub fn execute_flight(&mut self, number: &str) -> Result<(), OpsError> {
        let idx = self.flight_idx(number)?;
        let aircraft = self.registry.aircraft(&self.flights[idx].aircraft_id)?;
        let flight = &mut self.flights[idx];
        flight.execute()?;

        let (pilots, attendants) = flight
            .crew_id()
            .and_then(|id| self.crews.iter().find(|c| c.id == *id))
            .map_or((0, 0), |c| (c.pilot_count(), c.attendant_count()));
        let events = vec![
            Event::FlightStarted {
                flight: flight.number.clone(),
                route: (
                    self.registry.city_of(&flight.origin_id),
                    self.registry.city_of(&flight.destination_id),
                ),
                aircraft: aircraft.to_string(),
                passengers: flight.passengers().len(),
                pilots,
                attendants,
            },
            aircraft.take_off(),
            Event::Airborne {
                flight: flight.number.clone(),
            },
            aircraft.land(),
            Event::FlightCompleted {
                flight: flight.number.clone(),
            },
        ];
        events.into_iter().for_each(|e| self.record(e));
        Ok(())
    }

    /// Administrative cancellation. Goes through the same transition rules
    /// as every other status change.
    pub fn cancel_flight(&mut self, number: &str, reason: &str) -> Result<(), OpsError> {
        let idx = self.flight_idx(number)?;
        let flight = &mut self.flights[idx];
        flight.transition(FlightStatus::Cancelled(CancelReason::Operator(reason.to_string())))?;
        let event = Event::FlightCancelled {
            flight: flight.number.clone(),
            status: flight.status().clone(),
            airport: None,
        };
        self.record(event);
        Ok(())
    }

    pub fn flight_status(&mut self, number: &str) -> Result<FlightStatus, OpsError> {
        let flight = self.flight(number)?;
        let status = flight.status().clone();
        let event = Event::Status {
            flight: flight.number.clone(),
            status: status.clone(),
        };
        self.record(event);
        Ok(status)
    }

    /// One line per flight: route by city and current status.
    pub fn summary(&self) -> Vec<String> {
        self.flights
            .iter()
            .map(|f| {
                format!(
                    "flight {}: {} -> {}, status: {}",
                    f.number,
                    self.registry.city_of(&f.origin_id),
                    self.registry.city_of(&f.destination_id),
                    f.status()
                )
            })
            .collect()
    }
}
