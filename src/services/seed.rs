//! Demo data stored at startup.

use crate::domain::person::NewPerson;
use crate::domain::types::{Street, TypeConstraintError};
use crate::repository::{PersonListQuery, PersonReader, PersonWriter};
use crate::services::ServiceResult;

/// People stored by [`seed_demo_people`].
pub fn demo_people() -> Result<Vec<NewPerson>, TypeConstraintError> {
    Ok(vec![
        NewPerson::try_new("Ahmet")?.with_address(Street::optional(Some("ahmetFirstStreet"))),
        NewPerson::try_new("Burak")?
            .with_address(Street::optional(Some("firstStreet")))
            .with_address(Street::optional(Some("scStreet"))),
    ])
}

/// Stores the demo people that are not stored yet and returns how many were
/// created.
pub fn seed_demo_people<R>(repo: &R) -> ServiceResult<usize>
where
    R: PersonReader + PersonWriter + ?Sized,
{
    let mut created = 0;

    for new_person in demo_people()? {
        let existing = repo.list_people(PersonListQuery::new().name(new_person.name.as_str()))?;
        if !existing.is_empty() {
            log::info!("Skipping demo person {}: already stored", new_person.name);
            continue;
        }

        let stored = repo.create_person(&new_person)?;
        log::info!(
            "Seeded person {} ({}) with {} address(es)",
            stored.person.name,
            stored.person.id,
            stored.addresses.len()
        );
        created += 1;
    }

    Ok(created)
}
