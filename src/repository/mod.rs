use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        address::{Address, NewAddress},
        person::{NewPerson, Person, PersonWithAddresses, UpdatePerson},
        types::{AddressId, PersonId},
    },
    repository::errors::RepositoryResult,
};

pub mod address;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod person;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Filter applied when listing people.
///
/// A name filter matches exactly (case-sensitive). A missing or blank name
/// places no restriction on the result.
#[derive(Debug, Clone, Default)]
pub struct PersonListQuery {
    pub name: Option<String>,
}

impl PersonListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name predicate to apply, if any.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
}

pub trait PersonReader {
    fn get_person_by_id(&self, id: PersonId) -> RepositoryResult<Option<PersonWithAddresses>>;
    fn list_people(&self, query: PersonListQuery) -> RepositoryResult<Vec<Person>>;
    fn list_people_with_addresses(
        &self,
        query: PersonListQuery,
    ) -> RepositoryResult<Vec<PersonWithAddresses>>;
}

pub trait PersonWriter {
    fn create_person(&self, new_person: &NewPerson) -> RepositoryResult<PersonWithAddresses>;
    fn update_person(
        &self,
        id: PersonId,
        updates: &UpdatePerson,
    ) -> RepositoryResult<PersonWithAddresses>;
    fn delete_person(&self, id: PersonId) -> RepositoryResult<()>;
}

pub trait AddressReader {
    fn get_address_by_id(&self, id: AddressId) -> RepositoryResult<Option<Address>>;
    fn list_addresses(&self, person_id: PersonId) -> RepositoryResult<Vec<Address>>;
}

pub trait AddressWriter {
    fn add_address(&self, person_id: PersonId, address: &NewAddress) -> RepositoryResult<Address>;
    fn delete_address(&self, id: AddressId) -> RepositoryResult<()>;
}
