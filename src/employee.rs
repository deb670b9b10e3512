use crate::error::Refusal;
use crate::person::{Person, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type EmployeeId = Arc<str>;
pub type Roster = HashMap<EmployeeId, Employee>;

/// What an employee does on board, with the fields only that role carries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "duty", rename_all = "snake_case")]
pub enum Duty {
    Pilot {
        license_number: String,
        #[serde(default)]
        is_commander: bool,
        #[serde(default)]
        flight_hours: u32,
    },
    Navigator {
        navigation_cert: String,
    },
    RadioOperator {
        radio_license: String,
    },
    FlightAttendant {
        #[serde(default)]
        languages: Vec<String>,
    },
}

impl Duty {
    pub fn pilot(license_number: &str, is_commander: bool) -> Duty {
        Duty::Pilot {
            license_number: license_number.to_string(),
            is_commander,
            flight_hours: 0,
        }
    }

    pub fn navigator(navigation_cert: &str) -> Duty {
        Duty::Navigator {
            navigation_cert: navigation_cert.to_string(),
        }
    }

    pub fn radio_operator(radio_license: &str) -> Duty {
        Duty::RadioOperator {
            radio_license: radio_license.to_string(),
        }
    }

    pub fn flight_attendant(languages: &[&str]) -> Duty {
        Duty::FlightAttendant {
            languages: languages.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Slot name used when checking that an employee fits a crew position.
    pub fn slot(&self) -> &'static str {
        match self {
            Duty::Pilot { .. } => "pilot",
            Duty::Navigator { .. } => "navigator",
            Duty::RadioOperator { .. } => "radio operator",
            Duty::FlightAttendant { .. } => "flight attendant",
        }
    }

    pub fn credentials(&self) -> String {
        match self {
            Duty::Pilot {
                license_number,
                flight_hours,
                ..
            } => format!("{} ({} h)", license_number, flight_hours),
            Duty::Navigator { navigation_cert } => navigation_cert.clone(),
            Duty::RadioOperator { radio_license } => radio_license.clone(),
            Duty::FlightAttendant { languages } => languages.join(", "),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(flatten)]
    person: Person,
    pub employee_id: EmployeeId,
    pub experience_years: u32,
    #[serde(flatten)]
    pub duty: Duty,
}

impl Employee {
    pub fn new(person: Person, employee_id: &str, experience_years: u32, duty: Duty) -> Employee {
        Employee {
            person,
            employee_id: Arc::from(employee_id),
            experience_years,
            duty,
        }
    }

    pub fn is_pilot(&self) -> bool {
        matches!(self.duty, Duty::Pilot { .. })
    }

    pub fn is_commander(&self) -> bool {
        matches!(self.duty, Duty::Pilot { is_commander: true, .. })
    }

    /// Only the commander may raise a technical issue; anyone else is
    /// turned away and nothing changes.
    pub fn report_technical_issue(&self, issue: &str) -> Result<(), Refusal> {
        match self.duty {
            Duty::Pilot { is_commander: true, .. } => {
                tracing::info!(
                    pilot = %self.employee_id,
                    issue,
                    "commander reports technical issue"
                );
                Ok(())
            }
            Duty::Pilot { .. } => Err(Refusal::NotCommander {
                employee: self.employee_id.clone(),
                name: self.person.name().to_string(),
            }),
            _ => Err(Refusal::WrongRole {
                employee: self.employee_id.clone(),
                expected: "pilot",
            }),
        }
    }
}

impl Role for Employee {
    fn role(&self) -> &'static str {
        match self.duty {
            Duty::Pilot { is_commander: true, .. } => "captain",
            Duty::Pilot { .. } => "first officer",
            Duty::Navigator { .. } => "navigator",
            Duty::RadioOperator { .. } => "radio operator",
            Duty::FlightAttendant { .. } => "flight attendant",
        }
    }

    fn person(&self) -> &Person {
        &self.person
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, staff no.: {}, experience: {} years",
            self.role(),
            self.person,
            self.employee_id,
            self.experience_years
        )?;
        match &self.duty {
            Duty::Pilot { license_number, .. } => write!(f, ", license: {}", license_number),
            Duty::FlightAttendant { languages } if !languages.is_empty() => {
                write!(f, ", languages: {}", languages.join(", "))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pilot(commander: bool) -> Employee {
        Employee::new(
            Person::new("Ivan Ivanov", "123456", 45),
            "P001",
            20,
            Duty::pilot("ATPL-RUS-001", commander),
        )
    }

    #[test]
    fn test_role_labels() {
        assert_eq!("captain", pilot(true).role());
        assert_eq!("first officer", pilot(false).role());
        let fa = Employee::new(
            Person::new("Anna Smirnova", "555666", 28),
            "F001",
            5,
            Duty::flight_attendant(&["Russian", "English"]),
        );
        assert_eq!("flight attendant", fa.role());
        assert_eq!(
            "flight attendant: Anna Smirnova (ID: 555666), 28 y/o, staff no.: F001, experience: 5 years, languages: Russian, English",
            fa.to_string()
        );
    }

    #[test]
    fn test_only_commander_may_report() {
        assert_eq!(Ok(()), pilot(true).report_technical_issue("engine #2 failure"));
        assert_eq!(
            Err(Refusal::NotCommander {
                employee: Arc::from("P001"),
                name: "Ivan Ivanov".to_string(),
            }),
            pilot(false).report_technical_issue("engine #2 failure")
        );
    }

    #[test]
    fn test_deserialize_tagged_duty() {
        let raw = r#"{
            "name": "Sidor Sidorov", "id_number": "111222", "age": 40,
            "employee_id": "N001", "experience_years": 15,
            "duty": "navigator", "navigation_cert": "NAV-001"
        }"#;
        let employee: Employee = serde_json::from_str(raw).unwrap();
        assert_eq!(Duty::navigator("NAV-001"), employee.duty);
        assert_eq!("Sidor Sidorov", employee.name());
        assert_eq!("NAV-001", employee.duty.credentials());
        assert_eq!("ATPL-RUS-001 (0 h)", pilot(true).duty.credentials());
    }
}
