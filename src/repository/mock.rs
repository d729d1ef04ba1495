//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::address::{Address, NewAddress};
use crate::domain::person::{NewPerson, Person, PersonWithAddresses, UpdatePerson};
use crate::domain::types::{AddressId, PersonId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AddressReader, AddressWriter, PersonListQuery, PersonReader, PersonWriter};

mock! {
    pub Repository {}

    impl PersonReader for Repository {
        fn get_person_by_id(&self, id: PersonId) -> RepositoryResult<Option<PersonWithAddresses>>;
        fn list_people(&self, query: PersonListQuery) -> RepositoryResult<Vec<Person>>;
        fn list_people_with_addresses(
            &self,
            query: PersonListQuery,
        ) -> RepositoryResult<Vec<PersonWithAddresses>>;
    }

    impl PersonWriter for Repository {
        fn create_person(&self, new_person: &NewPerson) -> RepositoryResult<PersonWithAddresses>;
        fn update_person(
            &self,
            id: PersonId,
            updates: &UpdatePerson,
        ) -> RepositoryResult<PersonWithAddresses>;
        fn delete_person(&self, id: PersonId) -> RepositoryResult<()>;
    }

    impl AddressReader for Repository {
        fn get_address_by_id(&self, id: AddressId) -> RepositoryResult<Option<Address>>;
        fn list_addresses(&self, person_id: PersonId) -> RepositoryResult<Vec<Address>>;
    }

    impl AddressWriter for Repository {
        fn add_address(&self, person_id: PersonId, address: &NewAddress) -> RepositoryResult<Address>;
        fn delete_address(&self, id: AddressId) -> RepositoryResult<()>;
    }
}
