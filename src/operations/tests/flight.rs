use crate::airport::Weather;
use crate::error::{Invalid, OpsError, Refusal};
use crate::event::Event;
use crate::flight::CancelReason::{Operator, WeatherAtDestination, WeatherAtOrigin};
use crate::flight::FlightStatus::{Cancelled, Completed, Scheduled};
use crate::operations::tests::utils::{administrator, form_complete_crew, id, time};

#[test]
fn test_storm_at_destination_cancels_and_blocks_execution() {
    let mut admin = administrator();
    form_complete_crew(&mut admin, "CREW-1", ["P1", "P2", "N1", "R1", "F1"]);
    admin.create_flight("SU-200", "SVO", "LED", time(), "RA-1").unwrap();
    admin.assign_crew_to_flight("CREW-1", "SU-200").unwrap();
    admin.set_weather("LED", Weather::Storm).unwrap();
    admin.drain_journal();

    assert!(!admin.registry.airport("LED").unwrap().is_flight_possible());
    assert_eq!(Ok(false), admin.check_weather("SU-200"));
    assert_eq!(
        &Cancelled(WeatherAtDestination),
        admin.flight("SU-200").unwrap().status()
    );
    assert_eq!(
        vec![Event::FlightCancelled {
            flight: id("SU-200"),
            status: Cancelled(WeatherAtDestination),
            airport: Some(id("LED")),
        }],
        admin.drain_journal()
    );

    assert_eq!(
        Err(OpsError::Refused(Refusal::FlightCancelled(id("SU-200")))),
        admin.execute_flight("SU-200")
    );
    assert!(
        !admin
            .drain_journal()
            .iter()
            .any(|e| matches!(e, Event::TakeOff { .. } | Event::Landing { .. }))
    );
}

#[test]
fn test_cleared_weather_does_not_revive_cancelled_flight() {
    let mut admin = administrator();
    admin.create_flight("SU-200", "SVO", "LED", time(), "RA-1").unwrap();
    admin.set_weather("LED", Weather::Fog).unwrap();
    assert_eq!(Ok(false), admin.check_weather("SU-200"));

    admin.set_weather("LED", Weather::Normal).unwrap();
    admin.drain_journal();

    // both ends are flyable again but the cancellation stands
    assert_eq!(Ok(true), admin.check_weather("SU-200"));
    let status = admin.flight("SU-200").unwrap().status();
    assert!(status.is_cancelled());
    assert_eq!(&Cancelled(WeatherAtDestination), status);
    assert!(admin.drain_journal().is_empty());
}

#[test]
fn test_origin_weather_wins_over_destination() {
    let mut admin = administrator();
    admin.create_flight("SU-200", "SVO", "LED", time(), "RA-1").unwrap();
    admin.set_weather("SVO", Weather::Fog).unwrap();
    admin.set_weather("LED", Weather::Thunderstorm).unwrap();

    assert_eq!(Ok(false), admin.check_weather("SU-200"));
    assert_eq!(&Cancelled(WeatherAtOrigin), admin.flight("SU-200").unwrap().status());
}

#[test]
fn test_bad_weather_is_announced() {
    let mut admin = administrator();
    admin.set_weather("KZN", Weather::Snow).unwrap();
    admin.set_weather("LED", Weather::Normal).unwrap();
    assert_eq!(
        vec![Event::WeatherWarning {
            airport: id("KZN"),
            weather: Weather::Snow
        }],
        admin.drain_journal()
    );
}

#[test]
fn test_execution_completes_flight() {
    let mut admin = administrator();
    form_complete_crew(&mut admin, "CREW-1", ["P1", "P2", "N1", "R1", "F1"]);
    admin.create_flight("SU-100", "SVO", "LED", time(), "RA-1").unwrap();
    admin.assign_crew_to_flight("CREW-1", "SU-100").unwrap();
    admin.add_passenger("SU-100", "T1").unwrap();
    admin.drain_journal();

    assert_eq!(Ok(true), admin.check_weather("SU-100"));
    assert_eq!(Ok(()), admin.execute_flight("SU-100"));
    assert_eq!(&Completed, admin.flight("SU-100").unwrap().status());

    let journal = admin.drain_journal();
    assert!(matches!(
        journal.first(),
        Some(Event::FlightStarted {
            passengers: 1,
            pilots: 2,
            attendants: 1,
            ..
        })
    ));
    assert!(matches!(journal.get(1), Some(Event::TakeOff { .. })));
    assert!(matches!(journal.get(3), Some(Event::Landing { .. })));
    assert_eq!(
        Some(&Event::FlightCompleted {
            flight: id("SU-100")
        }),
        journal.last()
    );

    // completed is terminal
    assert!(matches!(
        admin.execute_flight("SU-100"),
        Err(OpsError::Refused(Refusal::InvalidTransition { .. }))
    ));
}

#[test]
fn test_execution_without_crew_is_refused() {
    let mut admin = administrator();
    admin.create_flight("SU-100", "SVO", "LED", time(), "RA-1").unwrap();
    assert_eq!(
        Err(OpsError::Refused(Refusal::NoCrewAssigned(id("SU-100")))),
        admin.execute_flight("SU-100")
    );
    assert_eq!(&Scheduled, admin.flight("SU-100").unwrap().status());
}

#[test]
fn test_boarding_stops_at_capacity() {
    let mut admin = administrator();
    admin.create_flight("SU-100", "SVO", "LED", time(), "RA-1").unwrap();
    admin.add_passenger("SU-100", "T1").unwrap();
    admin.add_passenger("SU-100", "T2").unwrap();

    assert_eq!(
        Err(OpsError::Refused(Refusal::FullyBooked(id("SU-100")))),
        admin.add_passenger("SU-100", "T3")
    );
    assert_eq!(2, admin.flight("SU-100").unwrap().passengers().len());
}

#[test]
fn test_passenger_boards_one_flight_only() {
    let mut admin = administrator();
    admin.create_flight("SU-100", "SVO", "LED", time(), "RA-1").unwrap();
    admin.create_flight("SU-300", "SVO", "KZN", time(), "RA-1").unwrap();
    admin.add_passenger("SU-100", "T1").unwrap();

    assert_eq!(
        Err(OpsError::Refused(Refusal::AlreadyBoarded {
            passenger: id("T1"),
            flight: id("SU-100"),
        })),
        admin.add_passenger("SU-300", "T1")
    );
    assert!(admin.flight("SU-300").unwrap().passengers().is_empty());
}

#[test]
fn test_operator_cancellation_is_a_transition() {
    let mut admin = administrator();
    admin.create_flight("SU-100", "SVO", "LED", time(), "RA-1").unwrap();
    assert_eq!(Ok(()), admin.cancel_flight("SU-100", "crew strike"));

    let status = admin.flight("SU-100").unwrap().status().clone();
    assert_eq!(Cancelled(Operator("crew strike".to_string())), status);
    assert_eq!("cancelled: crew strike", status.to_string());

    // a cancelled flight stays cancelled
    assert!(matches!(
        admin.cancel_flight("SU-100", "again"),
        Err(OpsError::Refused(Refusal::InvalidTransition { .. }))
    ));
    assert_eq!(Ok(status), admin.flight_status("SU-100"));
}

#[test]
fn test_unknown_references_are_invalid() {
    let mut admin = administrator();
    assert_eq!(
        Err(OpsError::Invalid(Invalid::UnknownAirport(id("JFK")))),
        admin.create_flight("SU-1", "SVO", "JFK", time(), "RA-1").map(|_| ())
    );
    assert_eq!(
        Err(OpsError::Invalid(Invalid::UnknownAircraft(id("RA-9")))),
        admin.create_flight("SU-1", "SVO", "LED", time(), "RA-9").map(|_| ())
    );
    assert_eq!(
        Err(OpsError::Invalid(Invalid::UnknownFlight(id("SU-404")))),
        admin.check_weather("SU-404")
    );
    admin.create_flight("SU-1", "SVO", "LED", time(), "RA-1").unwrap();
    assert_eq!(
        Err(OpsError::Invalid(Invalid::DuplicateFlight(id("SU-1")))),
        admin.create_flight("SU-1", "SVO", "KZN", time(), "RA-1").map(|_| ())
    );
}
