//! User domain
//!
//! Types for the user records held by the directory, and the closed set of
//! fields a draft is allowed to edit.

mod entity;
mod field;

pub use entity::{Address, Company, Geo, User, UserId};
pub use field::{AddressField, CompanyField, NestedField, UserField};
