use crate::error::Invalid;
use crate::event::Event;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub type AircraftId = Arc<str>;

/// Capabilities of anything that can fly a leg.
pub trait Flyable {
    fn take_off(&self) -> Event;
    fn land(&self) -> Event;
    /// Range in kilometres.
    fn flight_range(&self) -> f64;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub registration: AircraftId,
    pub model: String,
    pub capacity: u32,
    pub flight_range: f64,
    pub manufacturer: String,
    #[serde(default = "airworthy")]
    pub is_airworthy: bool,
}

fn airworthy() -> bool {
    true
}

impl Aircraft {
    pub fn new(
        registration: &str,
        model: &str,
        capacity: u32,
        flight_range: f64,
        manufacturer: &str,
    ) -> Result<Aircraft, Invalid> {
        let aircraft = Aircraft {
            registration: Arc::from(registration),
            model: model.to_string(),
            capacity,
            flight_range,
            manufacturer: manufacturer.to_string(),
            is_airworthy: true,
        };
        aircraft.validate()?;
        Ok(aircraft)
    }

    pub fn validate(&self) -> Result<(), Invalid> {
        if self.capacity == 0 {
            return Err(Invalid::ZeroCapacity(self.registration.clone()));
        }
        Ok(())
    }
}

impl Flyable for Aircraft {
    fn take_off(&self) -> Event {
        Event::TakeOff {
            model: self.model.clone(),
            registration: self.registration.clone(),
        }
    }

    fn land(&self) -> Event {
        Event::Landing {
            model: self.model.clone(),
            registration: self.registration.clone(),
        }
    }

    fn flight_range(&self) -> f64 {
        self.flight_range
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aircraft {} [{}], capacity: {}, range: {} km",
            self.model, self.registration, self.capacity, self.flight_range
        )
    }
}
