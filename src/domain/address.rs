use serde::{Deserialize, Serialize};

use crate::domain::types::{AddressId, PersonId, Street};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub id: AddressId,
    pub street: Option<Street>,
    /// Owning person. Deleting the owner deletes the address.
    pub person_id: PersonId,
}

/// Address data without an owner; the owner is bound when the address is stored.
#[derive(Clone, Debug, Default)]
pub struct NewAddress {
    pub street: Option<Street>,
}

impl NewAddress {
    #[must_use]
    pub fn new(street: Option<Street>) -> Self {
        Self { street }
    }
}
