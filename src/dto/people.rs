//! Transport shapes for people and their addresses.
//!
//! DTOs never carry store identifiers. Conversion from the domain is a plain
//! structural copy; validation only applies to DTOs received from outside.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::address::Address;
use crate::domain::person::PersonWithAddresses;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AddressDto {
    #[validate(custom(function = "not_blank"))]
    pub street: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PersonDto {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(nested)]
    pub addresses: Vec<AddressDto>,
}

impl From<&Address> for AddressDto {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street.as_ref().map(|s| s.as_str().to_string()),
        }
    }
}

impl From<PersonWithAddresses> for PersonDto {
    fn from(value: PersonWithAddresses) -> Self {
        Self {
            addresses: value.addresses.iter().map(AddressDto::from).collect(),
            name: value.person.name.into_inner(),
        }
    }
}

/// Maps every record, keeping the input order.
pub fn people_to_dtos(people: Vec<PersonWithAddresses>) -> Vec<PersonDto> {
    people.into_iter().map(PersonDto::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::Person;
    use crate::domain::types::{AddressId, PersonId, PersonName, Street};

    fn person(id: i32, name: &str, streets: &[Option<&str>]) -> PersonWithAddresses {
        let person_id = PersonId::new(id).unwrap();
        let addresses = streets
            .iter()
            .enumerate()
            .map(|(i, street)| Address {
                id: AddressId::new(id * 100 + i as i32 + 1).unwrap(),
                street: Street::optional(*street),
                person_id,
            })
            .collect();
        PersonWithAddresses::new(
            Person {
                id: person_id,
                name: PersonName::new(name).unwrap(),
            },
            addresses,
        )
    }

    #[test]
    fn mapping_copies_name_and_streets() {
        let dto = PersonDto::from(person(1, "Ahmet", &[Some("ahmetFirstStreet")]));
        assert_eq!(
            dto,
            PersonDto {
                name: "Ahmet".to_string(),
                addresses: vec![AddressDto {
                    street: Some("ahmetFirstStreet".to_string())
                }],
            }
        );
    }

    #[test]
    fn mapping_preserves_order_and_address_counts() {
        let source = vec![
            person(2, "Burak", &[Some("firstStreet"), Some("scStreet")]),
            person(1, "Ahmet", &[Some("ahmetFirstStreet")]),
            person(3, "Cem", &[]),
        ];
        let counts: Vec<usize> = source.iter().map(|p| p.addresses.len()).collect();

        let dtos = people_to_dtos(source);

        assert_eq!(
            dtos.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
            vec!["Burak", "Ahmet", "Cem"]
        );
        assert_eq!(
            dtos.iter().map(|d| d.addresses.len()).collect::<Vec<_>>(),
            counts
        );
    }

    #[test]
    fn json_shape_has_no_identifiers() {
        let dto = PersonDto::from(person(5, "Ahmet", &[Some("ahmetFirstStreet"), None]));
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ahmet",
                "addresses": [{"street": "ahmetFirstStreet"}, {"street": null}]
            })
        );
    }

    #[test]
    fn validation_rejects_blank_name() {
        let dto = PersonDto {
            name: "  ".to_string(),
            addresses: vec![],
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn validation_rejects_blank_street() {
        let dto = PersonDto {
            name: "Ahmet".to_string(),
            addresses: vec![AddressDto {
                street: Some(String::new()),
            }],
        };
        assert!(dto.validate().is_err());

        let ok = PersonDto {
            name: "Ahmet".to_string(),
            addresses: vec![AddressDto { street: None }],
        };
        assert!(ok.validate().is_ok());
    }
}
