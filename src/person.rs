use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub type PassengerId = Arc<str>;

/// Identity shared by everyone in the model. Fields are fixed once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    id_number: String,
    age: u32,
}

impl Person {
    pub fn new(name: &str, id_number: &str, age: u32) -> Person {
        Person {
            name: name.to_string(),
            id_number: id_number.to_string(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id_number(&self) -> &str {
        &self.id_number
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {}), {} y/o", self.name, self.id_number, self.age)
    }
}

/// Anything that carries a person and a role label.
pub trait Role {
    fn role(&self) -> &'static str;
    fn person(&self) -> &Person;

    fn name(&self) -> &str {
        self.person().name()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(flatten)]
    person: Person,
    pub passport: String,
    pub ticket_number: PassengerId,
}

impl Passenger {
    pub fn new(person: Person, passport: &str, ticket_number: &str) -> Passenger {
        Passenger {
            person,
            passport: passport.to_string(),
            ticket_number: Arc::from(ticket_number),
        }
    }
}

impl Role for Passenger {
    fn role(&self) -> &'static str {
        "passenger"
    }

    fn person(&self) -> &Person {
        &self.person
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, passport: {}", self.role(), self.person, self.passport)
    }
}
