//! User entity and its nested records

use serde::{Deserialize, Serialize};

use super::field::{AddressField, CompanyField, NestedField, UserField};

/// Numeric user identifier, stable for the lifetime of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic coordinates, carried through untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Postal address of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

impl Address {
    pub fn new(city: impl Into<String>, zipcode: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            zipcode: zipcode.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Street => &self.street,
            AddressField::Suite => &self.suite,
            AddressField::City => &self.city,
            AddressField::Zipcode => &self.zipcode,
        }
    }

    /// Replace one key, leaving the siblings as they are
    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        let slot = match field {
            AddressField::Street => &mut self.street,
            AddressField::Suite => &mut self.suite,
            AddressField::City => &mut self.city,
            AddressField::Zipcode => &mut self.zipcode,
        };
        *slot = value.into();
    }
}

/// Employer of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: CompanyField) -> &str {
        match field {
            CompanyField::Name => &self.name,
            CompanyField::CatchPhrase => &self.catch_phrase,
            CompanyField::Bs => &self.bs,
        }
    }

    /// Replace one key, leaving the siblings as they are
    pub fn set(&mut self, field: CompanyField, value: impl Into<String>) {
        let slot = match field {
            CompanyField::Name => &mut self.name,
            CompanyField::CatchPhrase => &mut self.catch_phrase,
            CompanyField::Bs => &mut self.bs,
        };
        *slot = value.into();
    }
}

/// User record as served by the directory endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    address: Address,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    website: String,
    #[serde(default)]
    company: Company,
}

impl User {
    /// Create a user with empty contact details
    pub fn new(id: UserId, name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            email: String::new(),
            address: Address::default(),
            phone: String::new(),
            website: String::new(),
            company: Company::default(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn with_company(mut self, company: Company) -> Self {
        self.company = company;
        self
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    /// Read a top-level editable field
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Username => &self.username,
            UserField::Email => &self.email,
            UserField::Phone => &self.phone,
            UserField::Website => &self.website,
        }
    }

    /// Read a nested editable field
    pub fn nested_field(&self, field: NestedField) -> &str {
        match field {
            NestedField::Address(key) => self.address.get(key),
            NestedField::Company(key) => self.company.get(key),
        }
    }

    // Mutators

    /// Replace a top-level scalar field
    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        let slot = match field {
            UserField::Name => &mut self.name,
            UserField::Username => &mut self.username,
            UserField::Email => &mut self.email,
            UserField::Phone => &mut self.phone,
            UserField::Website => &mut self.website,
        };
        *slot = value.into();
    }

    /// Replace one key of a nested record
    pub fn set_nested_field(&mut self, field: NestedField, value: impl Into<String>) {
        match field {
            NestedField::Address(key) => self.address.set(key, value),
            NestedField::Company(key) => self.company.set(key, value),
        }
    }
}
