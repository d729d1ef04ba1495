use serde::{Deserialize, Serialize};

use crate::domain::address::{Address, NewAddress};
use crate::domain::types::{PersonId, PersonName, Street, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: PersonName,
}

/// A stored person together with the addresses it owns.
///
/// Addresses refer back to their owner by [`PersonId`] only, so the
/// aggregate holds no reference cycle.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PersonWithAddresses {
    pub person: Person,
    pub addresses: Vec<Address>,
}

impl PersonWithAddresses {
    #[must_use]
    pub fn new(person: Person, addresses: Vec<Address>) -> Self {
        debug_assert!(addresses.iter().all(|a| a.person_id == person.id));
        Self { person, addresses }
    }
}

/// Person awaiting insertion along with the addresses to store under it.
#[derive(Clone, Debug)]
pub struct NewPerson {
    pub name: PersonName,
    pub addresses: Vec<NewAddress>,
}

impl NewPerson {
    /// Starts a person with an empty address set.
    #[must_use]
    pub fn new(name: PersonName) -> Self {
        Self {
            name,
            addresses: Vec::new(),
        }
    }

    pub fn try_new<S: Into<String>>(name: S) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(PersonName::new(name)?))
    }

    pub fn add_address(&mut self, street: Option<Street>) {
        self.addresses.push(NewAddress::new(street));
    }

    #[must_use]
    pub fn with_address(mut self, street: Option<Street>) -> Self {
        self.add_address(street);
        self
    }
}

/// Replacement state for a stored person: new name and full address set.
#[derive(Clone, Debug)]
pub struct UpdatePerson {
    pub name: PersonName,
    pub addresses: Vec<NewAddress>,
}

impl UpdatePerson {
    #[must_use]
    pub fn new(name: PersonName, addresses: Vec<NewAddress>) -> Self {
        Self { name, addresses }
    }
}
