//! Editable fields of a user record
//!
//! The set of fields a draft may touch is closed: top-level scalars plus the
//! keys of the two nested records. String names are parsed into these enums
//! at the edge, so an unknown name never reaches the record.

use std::str::FromStr;

use crate::domain::DomainError;

/// Top-level scalar fields. `id` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Name,
    Username,
    Email,
    Phone,
    Website,
}

impl UserField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Username,
        Self::Email,
        Self::Phone,
        Self::Website,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Website => "website",
        }
    }
}

impl FromStr for UserField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| match s {
                "id" => DomainError::invalid_field("'id' cannot be edited"),
                "address" | "company" => DomainError::invalid_field(format!(
                    "'{}' is a nested record; set one of its keys instead",
                    s
                )),
                _ => DomainError::invalid_field(format!("Unknown user field '{}'", s)),
            })
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable keys of `address`. `geo` is carried but not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Street,
    Suite,
    City,
    Zipcode,
}

impl AddressField {
    pub const ALL: [Self; 4] = [Self::Street, Self::Suite, Self::City, Self::Zipcode];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Street => "street",
            Self::Suite => "suite",
            Self::City => "city",
            Self::Zipcode => "zipcode",
        }
    }
}

impl FromStr for AddressField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::invalid_field(format!("Unknown address field '{}'", s)))
    }
}

/// Editable keys of `company`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    Name,
    CatchPhrase,
    Bs,
}

impl CompanyField {
    pub const ALL: [Self; 3] = [Self::Name, Self::CatchPhrase, Self::Bs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CatchPhrase => "catchPhrase",
            Self::Bs => "bs",
        }
    }
}

impl FromStr for CompanyField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::invalid_field(format!("Unknown company field '{}'", s)))
    }
}

/// A key inside one of the nested records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NestedField {
    Address(AddressField),
    Company(CompanyField),
}

impl NestedField {
    /// Resolve a `(container, key)` pair such as `("address", "city")`
    pub fn parse(container: &str, key: &str) -> Result<Self, DomainError> {
        match container {
            "address" => Ok(Self::Address(key.parse()?)),
            "company" => Ok(Self::Company(key.parse()?)),
            other => Err(DomainError::invalid_field(format!(
                "'{}' is not a nested user record",
                other
            ))),
        }
    }

    pub fn container(&self) -> &'static str {
        match self {
            Self::Address(_) => "address",
            Self::Company(_) => "company",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Address(field) => field.as_str(),
            Self::Company(field) => field.as_str(),
        }
    }
}

impl std::fmt::Display for NestedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.container(), self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_field_round_trips_through_name() {
        for field in UserField::ALL {
            assert_eq!(field.as_str().parse::<UserField>().unwrap(), field);
        }
    }

    #[test]
    fn test_id_is_not_editable() {
        let err = "id".parse::<UserField>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { .. }));
        assert!(err.to_string().contains("'id' cannot be edited"));
    }

    #[test]
    fn test_container_is_not_a_scalar() {
        let err = "address".parse::<UserField>().unwrap_err();
        assert!(err.to_string().contains("nested record"));
    }

    #[test]
    fn test_nested_field_parse() {
        assert_eq!(
            NestedField::parse("address", "city").unwrap(),
            NestedField::Address(AddressField::City)
        );
        assert_eq!(
            NestedField::parse("company", "catchPhrase").unwrap(),
            NestedField::Company(CompanyField::CatchPhrase)
        );
    }

    #[test]
    fn test_nested_field_unknown_container() {
        let err = NestedField::parse("name", "first").unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { .. }));
    }

    #[test]
    fn test_nested_field_unknown_key() {
        assert!(NestedField::parse("address", "geo").is_err());
        assert!(NestedField::parse("company", "catch_phrase").is_err());
    }

    #[test]
    fn test_nested_field_display() {
        let field = NestedField::Company(CompanyField::Bs);
        assert_eq!(field.to_string(), "company.bs");
    }
}
