use crate::aircraft::Flyable;
use crate::operations::administrator::Administrator;
use crate::person::Role;
use tabled::Tabled;

#[derive(Tabled)]
pub struct FlightRow {
    #[tabled(rename = "Flight")]
    pub number: String,
    #[tabled(rename = "From")]
    pub origin: String,
    #[tabled(rename = "To")]
    pub destination: String,
    #[tabled(rename = "Departure")]
    pub scheduled_time: String,
    #[tabled(rename = "Aircraft")]
    pub aircraft: String,
    #[tabled(rename = "Crew")]
    pub crew: String,
    #[tabled(rename = "Pax")]
    pub passengers: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

#[derive(Tabled)]
pub struct CrewRow {
    #[tabled(rename = "Crew")]
    pub id: String,
    #[tabled(rename = "Pilots")]
    pub pilots: usize,
    #[tabled(rename = "Attendants")]
    pub attendants: usize,
    #[tabled(rename = "Commander")]
    pub commander: String,
    #[tabled(rename = "Complete")]
    pub complete: bool,
}

#[derive(Tabled)]
pub struct EmployeeRow {
    #[tabled(rename = "Staff no.")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Age")]
    pub age: u32,
    #[tabled(rename = "Role")]
    pub role: String,
    #[tabled(rename = "Experience")]
    pub experience: u32,
    #[tabled(rename = "Credentials")]
    pub credentials: String,
    #[tabled(rename = "Available")]
    pub available: bool,
}

#[derive(Tabled)]
pub struct AirportRow {
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "City")]
    pub city: String,
    #[tabled(rename = "Weather")]
    pub weather: String,
    #[tabled(rename = "Operational")]
    pub operational: bool,
    #[tabled(rename = "Flyable")]
    pub flyable: bool,
}

#[derive(Tabled)]
pub struct AircraftRow {
    #[tabled(rename = "Registration")]
    pub registration: String,
    #[tabled(rename = "Model")]
    pub model: String,
    #[tabled(rename = "Manufacturer")]
    pub manufacturer: String,
    #[tabled(rename = "Capacity")]
    pub capacity: u32,
    #[tabled(rename = "Range km")]
    pub range: f64,
    #[tabled(rename = "Airworthy")]
    pub airworthy: bool,
}

#[derive(Tabled)]
pub struct PassengerRow {
    #[tabled(rename = "Ticket")]
    pub ticket: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "ID")]
    pub id_number: String,
    #[tabled(rename = "Passport")]
    pub passport: String,
    #[tabled(rename = "Flight")]
    pub flight: String,
}

pub fn flights(admin: &Administrator) -> Vec<FlightRow> {
    admin
        .flights
        .iter()
        .map(|f| FlightRow {
            number: f.number.to_string(),
            origin: f.origin_id.to_string(),
            destination: match f.diverted_from() {
                Some(planned) => format!("{} (was {})", f.destination_id, planned),
                None => f.destination_id.to_string(),
            },
            scheduled_time: f.scheduled_time.format("%Y-%m-%d %H:%M").to_string(),
            aircraft: f.aircraft_id.to_string(),
            crew: f.crew_id().map(|c| c.to_string()).unwrap_or_else(|| "-".into()),
            passengers: format!(
                "{}/{}",
                f.passengers().len(),
                admin
                    .registry
                    .aircraft
                    .get(&f.aircraft_id)
                    .map_or(0, |ac| ac.capacity)
            ),
            status: f.status().to_string(),
        })
        .collect()
}

pub fn crews(admin: &Administrator) -> Vec<CrewRow> {
    let roster = &admin.registry.employees;
    admin
        .crews
        .iter()
        .map(|c| CrewRow {
            id: c.id.to_string(),
            pilots: c.pilot_count(),
            attendants: c.attendant_count(),
            commander: c
                .commander(roster)
                .map(|p| p.name().to_string())
                .unwrap_or_else(|| "-".into()),
            complete: c.is_complete(roster),
        })
        .collect()
}

pub fn employees(admin: &Administrator) -> Vec<EmployeeRow> {
    let mut rows: Vec<EmployeeRow> = admin
        .registry
        .employees
        .values()
        .map(|e| EmployeeRow {
            id: e.employee_id.to_string(),
            name: e.name().to_string(),
            age: e.person().age(),
            role: e.role().to_string(),
            experience: e.experience_years,
            credentials: e.duty.credentials(),
            available: admin.is_available(&e.employee_id),
        })
        .collect();
    rows.sort_by(|a, b| a.id.cmp(&b.id));
    rows
}

pub fn airports(admin: &Administrator) -> Vec<AirportRow> {
    let mut rows: Vec<AirportRow> = admin
        .registry
        .airports
        .values()
        .map(|ap| AirportRow {
            code: ap.code.to_string(),
            name: ap.name.clone(),
            city: ap.city.clone(),
            weather: ap.weather().to_string(),
            operational: ap.is_operational,
            flyable: ap.is_flight_possible(),
        })
        .collect();
    rows.sort_by(|a, b| a.code.cmp(&b.code));
    rows
}

pub fn aircraft(admin: &Administrator) -> Vec<AircraftRow> {
    let mut rows: Vec<AircraftRow> = admin
        .registry
        .aircraft
        .values()
        .map(|ac| AircraftRow {
            registration: ac.registration.to_string(),
            model: ac.model.clone(),
            manufacturer: ac.manufacturer.clone(),
            capacity: ac.capacity,
            range: ac.flight_range(),
            airworthy: ac.is_airworthy,
        })
        .collect();
    rows.sort_by(|a, b| a.registration.cmp(&b.registration));
    rows
}

pub fn passengers(admin: &Administrator) -> Vec<PassengerRow> {
    let mut rows: Vec<PassengerRow> = admin
        .registry
        .passengers
        .values()
        .map(|p| PassengerRow {
            ticket: p.ticket_number.to_string(),
            name: p.name().to_string(),
            id_number: p.person().id_number().to_string(),
            passport: p.passport.clone(),
            flight: admin
                .flights
                .iter()
                .find(|f| f.passengers().contains(&p.ticket_number))
                .map(|f| f.number.to_string())
                .unwrap_or_else(|| "-".into()),
        })
        .collect();
    rows.sort_by(|a, b| a.ticket.cmp(&b.ticket));
    rows
}
