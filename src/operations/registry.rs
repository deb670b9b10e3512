use crate::aircraft::{Aircraft, AircraftId};
use crate::airport::{Airport, AirportCode, Weather};
use crate::employee::{Employee, Roster};
use crate::error::Invalid;
use crate::person::{Passenger, PassengerId};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Arenas for everything a flight or crew refers to by identifier.
pub struct Registry {
    pub airports: HashMap<AirportCode, Airport>,
    pub aircraft: HashMap<AircraftId, Aircraft>,
    pub employees: Roster,
    pub passengers: HashMap<PassengerId, Passenger>,
}

fn index<K, V>(
    kind: &'static str,
    items: Vec<V>,
    key: impl Fn(&V) -> K,
) -> Result<HashMap<K, V>, Invalid>
where
    K: Eq + Hash + std::fmt::Display,
{
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        let k = key(&item);
        if map.contains_key(&k) {
            return Err(Invalid::DuplicateEntry {
                kind,
                key: k.to_string(),
            });
        }
        map.insert(k, item);
    }
    Ok(map)
}

impl Registry {
    /// Diversion target for every emergency.
    pub const FALLBACK_AIRPORT: &'static str = "SVO";

    pub fn new(
        airports: Vec<Airport>,
        aircraft: Vec<Aircraft>,
        employees: Vec<Employee>,
        passengers: Vec<Passenger>,
    ) -> Result<Registry, Invalid> {
        let mut airports = index("airport", airports, |a| a.code.clone())?;
        airports
            .entry(Arc::from(Self::FALLBACK_AIRPORT))
            .or_insert_with(|| {
                Airport::new(
                    Self::FALLBACK_AIRPORT,
                    "Sheremetyevo",
                    "Moscow",
                    "Russia",
                    Weather::Normal,
                )
            });

        for ac in &aircraft {
            ac.validate()?;
        }

        Ok(Registry {
            airports,
            aircraft: index("aircraft", aircraft, |a| a.registration.clone())?,
            employees: index("employee", employees, |e| e.employee_id.clone())?,
            passengers: index("passenger", passengers, |p| p.ticket_number.clone())?,
        })
    }

    pub fn fallback_airport(&self) -> AirportCode {
        Arc::from(Self::FALLBACK_AIRPORT)
    }

    pub fn airport(&self, code: &str) -> Result<&Airport, Invalid> {
        self.airports
            .get(code)
            .ok_or_else(|| Invalid::UnknownAirport(Arc::from(code)))
    }

    pub fn airport_mut(&mut self, code: &str) -> Result<&mut Airport, Invalid> {
        self.airports
            .get_mut(code)
            .ok_or_else(|| Invalid::UnknownAirport(Arc::from(code)))
    }

    pub fn aircraft(&self, registration: &str) -> Result<&Aircraft, Invalid> {
        self.aircraft
            .get(registration)
            .ok_or_else(|| Invalid::UnknownAircraft(Arc::from(registration)))
    }

    pub fn employee(&self, employee_id: &str) -> Result<&Employee, Invalid> {
        self.employees
            .get(employee_id)
            .ok_or_else(|| Invalid::UnknownEmployee(Arc::from(employee_id)))
    }

    pub fn passenger(&self, ticket: &str) -> Result<&Passenger, Invalid> {
        self.passengers
            .get(ticket)
            .ok_or_else(|| Invalid::UnknownPassenger(Arc::from(ticket)))
    }

    /// City of an airport, falling back to its code when unknown.
    pub fn city_of(&self, code: &AirportCode) -> String {
        self.airports
            .get(code)
            .map(|ap| ap.city.clone())
            .unwrap_or_else(|| code.to_string())
    }
}
