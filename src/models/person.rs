//! Diesel models representing people.

use diesel::prelude::*;

use crate::domain::person::{
    NewPerson as DomainNewPerson, Person as DomainPerson, UpdatePerson as DomainUpdatePerson,
};
use crate::domain::types::{PersonId, PersonName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::person)]
/// Diesel model for [`crate::domain::person::Person`].
pub struct Person {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::person)]
/// Insertable form of [`Person`].
pub struct NewPerson<'a> {
    pub name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::person)]
/// Data used when updating a [`Person`] record.
pub struct UpdatePerson<'a> {
    pub name: &'a str,
}

impl TryFrom<Person> for DomainPerson {
    type Error = TypeConstraintError;

    fn try_from(person: Person) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PersonId::try_from(person.id)?,
            name: PersonName::new(person.name)?,
        })
    }
}

impl<'a> From<&'a DomainNewPerson> for NewPerson<'a> {
    fn from(person: &'a DomainNewPerson) -> Self {
        Self {
            name: person.name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdatePerson> for UpdatePerson<'a> {
    fn from(person: &'a DomainUpdatePerson) -> Self {
        Self {
            name: person.name.as_str(),
        }
    }
}
