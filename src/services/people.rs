//! Services listing people for the JSON API.

use crate::domain::types::PersonId;
use crate::dto::people::{PersonDto, people_to_dtos};
use crate::repository::{PersonListQuery, PersonReader};
use crate::services::{ServiceError, ServiceResult};

/// Returns every stored person with addresses, in store order.
pub fn list_people<R>(repo: &R) -> ServiceResult<Vec<PersonDto>>
where
    R: PersonReader + ?Sized,
{
    find_people(repo, None)
}

/// Returns the people whose name equals `name` exactly, or everyone when the
/// name is missing or blank.
pub fn find_people<R>(repo: &R, name: Option<&str>) -> ServiceResult<Vec<PersonDto>>
where
    R: PersonReader + ?Sized,
{
    let mut query = PersonListQuery::new();
    if let Some(name) = name {
        query = query.name(name);
    }

    let people = repo.list_people_with_addresses(query)?;

    Ok(people_to_dtos(people))
}

/// Loads a single person by id.
pub fn get_person<R>(repo: &R, person_id: i32) -> ServiceResult<PersonDto>
where
    R: PersonReader + ?Sized,
{
    let person_id = PersonId::new(person_id)?;

    let person = repo
        .get_person_by_id(person_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(person.into())
}
