//! Repository implementation for people and their owned addresses.

use diesel::{Connection, prelude::*, sqlite::Sqlite};

use crate::{
    domain::{
        address::{Address, NewAddress},
        person::{NewPerson, Person, PersonWithAddresses, UpdatePerson},
        types::PersonId,
    },
    models::{
        address::{Address as DbAddress, NewAddress as DbNewAddress},
        person::{NewPerson as DbNewPerson, Person as DbPerson, UpdatePerson as DbUpdatePerson},
    },
    repository::{
        DieselRepository, PersonListQuery, PersonReader, PersonWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{address, person},
};

/// Builds the people query with one predicate per active filter.
fn filtered_people(query: &PersonListQuery) -> person::BoxedQuery<'_, Sqlite> {
    let mut items = person::table.into_boxed::<Sqlite>();

    if let Some(name) = query.name_filter() {
        items = items.filter(person::name.eq(name));
    }

    items.order(person::id.asc())
}

fn into_aggregate(
    db_person: DbPerson,
    db_addresses: Vec<DbAddress>,
) -> RepositoryResult<PersonWithAddresses> {
    let person = Person::try_from(db_person).map_err(RepositoryError::from)?;
    let addresses = db_addresses
        .into_iter()
        .map(|a| Address::try_from(a).map_err(RepositoryError::from))
        .collect::<Result<Vec<_>, RepositoryError>>()?;

    Ok(PersonWithAddresses::new(person, addresses))
}

fn insert_addresses(
    conn: &mut SqliteConnection,
    person_id: i32,
    addresses: &[NewAddress],
) -> QueryResult<Vec<DbAddress>> {
    addresses
        .iter()
        .map(|a| {
            diesel::insert_into(address::table)
                .values(DbNewAddress::new(a, person_id))
                .get_result::<DbAddress>(conn)
        })
        .collect()
}

impl PersonReader for DieselRepository {
    fn get_person_by_id(&self, id: PersonId) -> RepositoryResult<Option<PersonWithAddresses>> {
        let mut conn = self.conn()?;

        let Some(db_person) = person::table
            .find(id.get())
            .first::<DbPerson>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let db_addresses = DbAddress::belonging_to(&db_person)
            .order(address::id.asc())
            .load::<DbAddress>(&mut conn)?;

        into_aggregate(db_person, db_addresses).map(Some)
    }

    fn list_people(&self, query: PersonListQuery) -> RepositoryResult<Vec<Person>> {
        let mut conn = self.conn()?;

        filtered_people(&query)
            .load::<DbPerson>(&mut conn)?
            .into_iter()
            .map(|p| Person::try_from(p).map_err(RepositoryError::from))
            .collect()
    }

    fn list_people_with_addresses(
        &self,
        query: PersonListQuery,
    ) -> RepositoryResult<Vec<PersonWithAddresses>> {
        let mut conn = self.conn()?;

        let db_people = filtered_people(&query).load::<DbPerson>(&mut conn)?;

        let db_addresses = DbAddress::belonging_to(&db_people)
            .order(address::id.asc())
            .load::<DbAddress>(&mut conn)?;
        let grouped = db_addresses.grouped_by(&db_people);

        db_people
            .into_iter()
            .zip(grouped)
            .map(|(db_person, db_addresses)| into_aggregate(db_person, db_addresses))
            .collect()
    }
}

impl PersonWriter for DieselRepository {
    fn create_person(&self, new_person: &NewPerson) -> RepositoryResult<PersonWithAddresses> {
        let mut conn = self.conn()?;

        let (db_person, db_addresses) =
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                let db_person = diesel::insert_into(person::table)
                    .values(DbNewPerson::from(new_person))
                    .get_result::<DbPerson>(conn)?;

                let db_addresses = insert_addresses(conn, db_person.id, &new_person.addresses)?;

                Ok((db_person, db_addresses))
            })?;

        into_aggregate(db_person, db_addresses)
    }

    fn update_person(
        &self,
        id: PersonId,
        updates: &UpdatePerson,
    ) -> RepositoryResult<PersonWithAddresses> {
        let mut conn = self.conn()?;

        let (db_person, db_addresses) =
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                let db_person = diesel::update(person::table.find(id.get()))
                    .set(DbUpdatePerson::from(updates))
                    .get_result::<DbPerson>(conn)?;

                diesel::delete(address::table.filter(address::person_id.eq(id.get())))
                    .execute(conn)?;
                let db_addresses = insert_addresses(conn, id.get(), &updates.addresses)?;

                Ok((db_person, db_addresses))
            })?;

        into_aggregate(db_person, db_addresses)
    }

    fn delete_person(&self, id: PersonId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::delete(address::table.filter(address::person_id.eq(id.get())))
                .execute(conn)?;
            let affected = diesel::delete(person::table.find(id.get())).execute(conn)?;
            if affected == 0 {
                return Err(diesel::result::Error::NotFound);
            }
            Ok(())
        })
        .map_err(RepositoryError::from)
    }
}
