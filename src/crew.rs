use crate::employee::{Employee, EmployeeId, Roster};
use crate::error::Refusal;
use crate::person::Role;
use std::sync::Arc;

pub type CrewId = Arc<str>;

/// A flight crew built up slot by slot. Members are referenced by staff
/// number; the employees themselves live in the roster.
#[derive(Clone, Debug, PartialEq)]
pub struct Crew {
    pub id: CrewId,
    pilots: Vec<EmployeeId>,
    navigator: Option<EmployeeId>,
    radio_operator: Option<EmployeeId>,
    flight_attendants: Vec<EmployeeId>,
}

impl Crew {
    pub const MAX_PILOTS: usize = 2;

    pub fn new(id: CrewId) -> Crew {
        Crew {
            id,
            pilots: vec![],
            navigator: None,
            radio_operator: None,
            flight_attendants: vec![],
        }
    }

    fn expect_duty(&self, employee: &Employee, slot: &'static str) -> Result<(), Refusal> {
        if employee.duty.slot() != slot {
            return Err(Refusal::WrongRole {
                employee: employee.employee_id.clone(),
                expected: slot,
            });
        }
        if self.contains(&employee.employee_id) {
            return Err(Refusal::EmployeeUnavailable(employee.employee_id.clone()));
        }
        Ok(())
    }

    pub fn add_pilot(&mut self, pilot: &Employee) -> Result<(), Refusal> {
        self.expect_duty(pilot, "pilot")?;
        if self.pilots.len() >= Self::MAX_PILOTS {
            return Err(Refusal::PilotSeatsFull(self.id.clone()));
        }
        self.pilots.push(pilot.employee_id.clone());
        Ok(())
    }

    /// Last write wins. Returns whoever held the seat before.
    pub fn set_navigator(&mut self, navigator: &Employee) -> Result<Option<EmployeeId>, Refusal> {
        self.expect_duty(navigator, "navigator")?;
        Ok(self.navigator.replace(navigator.employee_id.clone()))
    }

    /// Last write wins. Returns whoever held the seat before.
    pub fn set_radio_operator(
        &mut self,
        operator: &Employee,
    ) -> Result<Option<EmployeeId>, Refusal> {
        self.expect_duty(operator, "radio operator")?;
        Ok(self.radio_operator.replace(operator.employee_id.clone()))
    }

    pub fn add_flight_attendant(&mut self, attendant: &Employee) -> Result<(), Refusal> {
        self.expect_duty(attendant, "flight attendant")?;
        self.flight_attendants.push(attendant.employee_id.clone());
        Ok(())
    }

    pub fn contains(&self, employee_id: &EmployeeId) -> bool {
        self.members().any(|id| id == employee_id)
    }

    pub fn members(&self) -> impl Iterator<Item = &EmployeeId> {
        self.pilots
            .iter()
            .chain(self.navigator.iter())
            .chain(self.radio_operator.iter())
            .chain(self.flight_attendants.iter())
    }

    pub fn pilot_count(&self) -> usize {
        self.pilots.len()
    }

    pub fn attendant_count(&self) -> usize {
        self.flight_attendants.len()
    }

    pub fn is_complete(&self, roster: &Roster) -> bool {
        self.pilots.len() == Self::MAX_PILOTS
            && self.commander(roster).is_some()
            && self.navigator.is_some()
            && self.radio_operator.is_some()
            && !self.flight_attendants.is_empty()
    }

    /// First pilot holding the commander flag.
    pub fn commander<'a>(&self, roster: &'a Roster) -> Option<&'a Employee> {
        self.pilots
            .iter()
            .filter_map(|id| roster.get(id))
            .find(|p| p.is_commander())
    }

    /// Multi-line listing of the crew, one member per line.
    pub fn describe(&self, roster: &Roster) -> String {
        let mut lines = vec![format!("crew {}:", self.id)];
        lines.extend(
            self.members()
                .map(|id| match roster.get(id) {
                    Some(employee) => employee.to_string(),
                    None => format!("{} (not on roster)", id),
                }),
        );
        lines.join("\n")
    }

    /// Role label of a member, for journal lines.
    pub fn label_of(employee: &Employee) -> &'static str {
        if employee.is_pilot() {
            "pilot"
        } else {
            employee.role()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::Duty;
    use crate::person::Person;

    fn employee(id: &str, duty: Duty) -> Employee {
        Employee::new(Person::new(id, id, 30), id, 5, duty)
    }

    #[test]
    fn test_third_pilot_is_refused() {
        let mut crew = Crew::new(Arc::from("CREW-1"));
        crew.add_pilot(&employee("P1", Duty::pilot("L1", true))).unwrap();
        crew.add_pilot(&employee("P2", Duty::pilot("L2", false))).unwrap();
        assert_eq!(
            Err(Refusal::PilotSeatsFull(Arc::from("CREW-1"))),
            crew.add_pilot(&employee("P3", Duty::pilot("L3", false)))
        );
        assert_eq!(2, crew.pilot_count());
        assert!(!crew.contains(&Arc::from("P3")));
    }

    #[test]
    fn test_navigator_last_write_wins() {
        let mut crew = Crew::new(Arc::from("CREW-1"));
        assert_eq!(Ok(None), crew.set_navigator(&employee("N1", Duty::navigator("C1"))));
        assert_eq!(
            Ok(Some(Arc::from("N1"))),
            crew.set_navigator(&employee("N2", Duty::navigator("C2")))
        );
        assert!(crew.contains(&Arc::from("N2")));
        assert!(!crew.contains(&Arc::from("N1")));
    }

    #[test]
    fn test_slot_must_match_duty() {
        let mut crew = Crew::new(Arc::from("CREW-1"));
        let radio = employee("R1", Duty::radio_operator("RAD-1"));
        assert_eq!(
            Err(Refusal::WrongRole {
                employee: Arc::from("R1"),
                expected: "navigator"
            }),
            crew.set_navigator(&radio)
        );
        assert_eq!(
            Err(Refusal::WrongRole {
                employee: Arc::from("R1"),
                expected: "pilot"
            }),
            crew.add_pilot(&radio)
        );
        assert_eq!(0, crew.members().count());
    }

    #[test]
    fn test_commander_lookup() {
        let roster: Roster = [
            employee("P1", Duty::pilot("L1", false)),
            employee("P2", Duty::pilot("L2", true)),
        ]
        .into_iter()
        .map(|e| (e.employee_id.clone(), e))
        .collect();
        let mut crew = Crew::new(Arc::from("CREW-1"));
        assert!(crew.commander(&roster).is_none());
        crew.add_pilot(&roster["P1"]).unwrap();
        assert!(crew.commander(&roster).is_none());
        crew.add_pilot(&roster["P2"]).unwrap();
        assert_eq!(
            Some("P2"),
            crew.commander(&roster).map(|p| p.employee_id.as_ref())
        );
    }
}
