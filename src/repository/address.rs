//! Repository implementation for addresses addressed on their own.

use diesel::prelude::*;

use crate::{
    domain::{
        address::{Address, NewAddress},
        types::{AddressId, PersonId},
    },
    models::address::{Address as DbAddress, NewAddress as DbNewAddress},
    repository::{
        AddressReader, AddressWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::address,
};

impl AddressReader for DieselRepository {
    fn get_address_by_id(&self, id: AddressId) -> RepositoryResult<Option<Address>> {
        let mut conn = self.conn()?;
        let db_address = address::table
            .find(id.get())
            .first::<DbAddress>(&mut conn)
            .optional()?;

        match db_address {
            Some(db_address) => Ok(Some(
                Address::try_from(db_address).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_addresses(&self, person_id: PersonId) -> RepositoryResult<Vec<Address>> {
        let mut conn = self.conn()?;
        address::table
            .filter(address::person_id.eq(person_id.get()))
            .order(address::id.asc())
            .load::<DbAddress>(&mut conn)?
            .into_iter()
            .map(|a| Address::try_from(a).map_err(RepositoryError::from))
            .collect()
    }
}

impl AddressWriter for DieselRepository {
    fn add_address(&self, person_id: PersonId, address: &NewAddress) -> RepositoryResult<Address> {
        let mut conn = self.conn()?;
        let db_address = diesel::insert_into(address::table)
            .values(DbNewAddress::new(address, person_id.get()))
            .get_result::<DbAddress>(&mut conn)?;

        Address::try_from(db_address).map_err(RepositoryError::from)
    }

    fn delete_address(&self, id: AddressId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        let affected = diesel::delete(address::table.find(id.get())).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
