use crate::aircraft::Aircraft;
use crate::airport::{Airport, Weather};
use crate::employee::{Duty, Employee};
use crate::operations::administrator::Administrator;
use crate::operations::registry::Registry;
use crate::person::{Passenger, Person};
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, 25)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap()
}

pub fn add_airport(airports: &mut Vec<Airport>, code: &str, city: &str, weather: Weather) {
    airports.push(Airport::new(code, code, city, "Russia", weather));
}

pub fn add_aircraft(aircraft: &mut Vec<Aircraft>, registration: &str, capacity: u32) {
    aircraft.push(Aircraft::new(registration, "Superjet", capacity, 4500.0, "Sukhoi").unwrap());
}

pub fn add_employee(employees: &mut Vec<Employee>, employee_id: &str, duty: Duty) {
    employees.push(Employee::new(
        Person::new(&format!("{} Name", employee_id), employee_id, 35),
        employee_id,
        10,
        duty,
    ));
}

pub fn add_passenger(passengers: &mut Vec<Passenger>, ticket: &str) {
    passengers.push(Passenger::new(
        Person::new(&format!("{} Traveller", ticket), ticket, 30),
        &format!("MP-{}", ticket),
        ticket,
    ));
}

/// SVO, LED and KZN with good weather, one 2-seat aircraft, two full crews
/// worth of staff and three passengers.
pub fn administrator() -> Administrator {
    let mut airports = Vec::new();
    let mut aircraft = Vec::new();
    let mut employees = Vec::new();
    let mut passengers = Vec::new();

    add_airport(&mut airports, "SVO", "Moscow", Weather::Normal);
    add_airport(&mut airports, "LED", "Saint Petersburg", Weather::Normal);
    add_airport(&mut airports, "KZN", "Kazan", Weather::Normal);

    add_aircraft(&mut aircraft, "RA-1", 2);

    add_employee(&mut employees, "P1", Duty::pilot("L1", true));
    add_employee(&mut employees, "P2", Duty::pilot("L2", false));
    add_employee(&mut employees, "P3", Duty::pilot("L3", true));
    add_employee(&mut employees, "P4", Duty::pilot("L4", false));
    add_employee(&mut employees, "N1", Duty::navigator("NAV-1"));
    add_employee(&mut employees, "N2", Duty::navigator("NAV-2"));
    add_employee(&mut employees, "R1", Duty::radio_operator("RAD-1"));
    add_employee(&mut employees, "R2", Duty::radio_operator("RAD-2"));
    add_employee(&mut employees, "F1", Duty::flight_attendant(&["Russian"]));
    add_employee(&mut employees, "F2", Duty::flight_attendant(&["English"]));

    add_passenger(&mut passengers, "T1");
    add_passenger(&mut passengers, "T2");
    add_passenger(&mut passengers, "T3");

    let registry = Registry::new(airports, aircraft, employees, passengers).unwrap();
    Administrator::new("Admin", "A001", registry)
}

pub fn form_complete_crew(admin: &mut Administrator, crew_id: &str, members: [&str; 5]) {
    admin.form_crew(crew_id).unwrap();
    for member in members {
        admin.enlist(crew_id, member).unwrap();
    }
}

pub fn arb_weather() -> impl Strategy<Value = Weather> {
    prop_oneof![
        Just(Weather::Normal),
        Just(Weather::Storm),
        Just(Weather::Fog),
        Just(Weather::Snow),
        Just(Weather::Thunderstorm),
    ]
}
