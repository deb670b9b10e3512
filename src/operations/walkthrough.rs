//! Scripted run through the whole model: crew formation, a normal flight,
//! a weather cancellation and an emergency diversion. Flies against whatever
//! scenario the administrator was loaded with; `data/default.json` holds the
//! entities it expects, anything missing is reported as a refusal.

use crate::aircraft::{Aircraft, Flyable};
use crate::error::OpsError;
use crate::operations::administrator::Administrator;
use chrono::{NaiveDate, NaiveDateTime};
use std::io;
use std::io::Write;

pub fn departure_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, 25)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap_or_default()
}

fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", title)?;
    writeln!(out, "{}", "-".repeat(50))
}

/// Prints what the last steps recorded, then the refusal if there was one.
fn flush(
    out: &mut impl Write,
    admin: &mut Administrator,
    outcome: Result<(), OpsError>,
) -> io::Result<()> {
    for event in admin.drain_journal() {
        writeln!(out, "{}", event)?;
    }
    if let Err(e) = outcome {
        writeln!(out, "{}", e)?;
    }
    Ok(())
}

fn form_crew(admin: &mut Administrator, crew: &str, members: &[&str]) -> Result<(), OpsError> {
    admin.form_crew(crew)?;
    members
        .iter()
        .try_for_each(|employee| admin.enlist(crew, employee))
}

pub fn run(admin: &mut Administrator, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "AIRLINE OPERATIONS CONTROL")?;
    writeln!(out, "{}", "~".repeat(70))?;

    section(out, "1. AIRPORTS")?;
    for code in ["SVO", "LED", "AER"] {
        if let Ok(airport) = admin.registry.airport(code) {
            writeln!(out, "{} (weather: {})", airport, airport.weather())?;
        }
    }

    section(out, "2. AIRCRAFT")?;
    let mut fleet: Vec<&Aircraft> = admin.registry.aircraft.values().collect();
    fleet.sort_by_key(|ac| ac.registration.clone());
    for ac in fleet {
        writeln!(out, "{}", ac)?;
    }

    section(out, "3. STAFF")?;
    for id in ["P001", "P002", "N001", "R001", "F001", "F002"] {
        if let Ok(employee) = admin.registry.employee(id) {
            writeln!(out, "{}", employee)?;
        }
    }

    section(out, "4. ADMINISTRATOR")?;
    writeln!(out, "administrator: {} (ID: {})", admin.name, admin.admin_id)?;

    section(out, "5. CREW FORMATION")?;
    let outcome = form_crew(admin, "CREW-001", &["P001", "P002", "N001", "R001", "F001", "F002"]);
    flush(out, admin, outcome)?;
    if let Ok(crew) = admin.crew("CREW-001") {
        writeln!(out, "crew complete: {}", crew.is_complete(&admin.registry.employees))?;
        writeln!(out, "{}", crew.describe(&admin.registry.employees))?;
    }

    section(out, "6. FLIGHT SU-100")?;
    let outcome = admin
        .create_flight("SU-100", "SVO", "LED", departure_time(), "RA-89001")
        .map(|_| ())
        .and_then(|_| admin.assign_crew_to_flight("CREW-001", "SU-100"))
        .and_then(|_| admin.add_passenger("SU-100", "TKT001"))
        .and_then(|_| admin.add_passenger("SU-100", "TKT002"));
    flush(out, admin, outcome)?;

    section(out, "7. WEATHER CHECK")?;
    let outcome = admin.check_weather("SU-100").and_then(|ok| {
        if ok {
            admin.execute_flight("SU-100")
        } else {
            Ok(())
        }
    });
    flush(out, admin, outcome)?;

    section(out, "8. WEATHER CANCELLATION")?;
    let outcome = admin
        .create_flight("SU-200", "SVO", "AER", departure_time(), "RA-89002")
        .map(|_| ())
        .and_then(|_| admin.check_weather("SU-200").map(|_| ()));
    flush(out, admin, outcome)?;

    section(out, "9. IN-FLIGHT DIVERSION")?;
    let outcome = admin
        .create_flight("SU-300", "SVO", "KZN", departure_time(), "RA-89001")
        .map(|_| ())
        .and_then(|_| form_crew(admin, "CREW-002", &["P003", "P004", "N002", "R002", "F003"]))
        .and_then(|_| admin.assign_crew_to_flight("CREW-002", "SU-300"))
        .and_then(|_| admin.check_weather("SU-300"));
    match outcome {
        Ok(true) => {
            flush(out, admin, Ok(()))?;
            let aircraft = admin.registry.aircraft("RA-89001").ok().cloned();
            if let Some(ac) = &aircraft {
                writeln!(out, "{}", ac.take_off())?;
            }
            let outcome = admin.report_technical_issue("P003", "SU-300", "engine #2 failure");
            flush(out, admin, outcome)?;
            if let Some(ac) = &aircraft {
                writeln!(out, "{}", ac.land())?;
            }
        }
        other => flush(out, admin, other.map(|_| ()))?,
    }

    writeln!(out, "\n{}", "=".repeat(70))?;
    writeln!(out, "FLIGHT SUMMARY")?;
    writeln!(out, "{}", "=".repeat(70))?;
    for line in admin.summary() {
        writeln!(out, "* {}", line)?;
    }
    Ok(())
}
