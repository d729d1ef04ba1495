//! Diesel models representing addresses owned by people.

use diesel::prelude::*;

use crate::domain::address::{Address as DomainAddress, NewAddress as DomainNewAddress};
use crate::domain::types::{AddressId, PersonId, Street, TypeConstraintError};
use crate::models::person::Person;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Person, foreign_key = person_id))]
#[diesel(table_name = crate::schema::address)]
/// Diesel model for [`crate::domain::address::Address`].
pub struct Address {
    pub id: i32,
    pub street: Option<String>,
    pub person_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::address)]
/// Insertable form of [`Address`] bound to its owner.
pub struct NewAddress<'a> {
    pub street: Option<&'a str>,
    pub person_id: i32,
}

impl<'a> NewAddress<'a> {
    pub fn new(address: &'a DomainNewAddress, person_id: i32) -> Self {
        Self {
            street: address.street.as_ref().map(|s| s.as_str()),
            person_id,
        }
    }
}

impl TryFrom<Address> for DomainAddress {
    type Error = TypeConstraintError;

    fn try_from(address: Address) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AddressId::try_from(address.id)?,
            street: Street::optional(address.street),
            person_id: PersonId::try_from(address.person_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_address_is_bound_to_owner() {
        let domain = DomainNewAddress::new(Street::optional(Some("scStreet")));
        let new = NewAddress::new(&domain, 4);
        assert_eq!(new.street, Some("scStreet"));
        assert_eq!(new.person_id, 4);
    }

    #[test]
    fn address_into_domain() {
        let db_address = Address {
            id: 9,
            street: None,
            person_id: 4,
        };
        let domain = DomainAddress::try_from(db_address).unwrap();
        assert_eq!(domain.id.get(), 9);
        assert!(domain.street.is_none());
        assert_eq!(domain.person_id.get(), 4);
    }

    #[test]
    fn stored_street_is_not_trimmed() {
        let db_address = Address {
            id: 1,
            street: Some("  Main St  ".to_string()),
            person_id: 4,
        };
        let domain = DomainAddress::try_from(db_address).unwrap();
        assert_eq!(
            domain.street.map(String::from),
            Some("  Main St  ".to_string())
        );
    }
}
