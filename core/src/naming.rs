//! # Naming Conventions
//!
//! Conversions between Java style `camelCase` and target style `snake_case`
//! identifiers. The two directions are independent operations; they are not
//! guaranteed to undo each other.

use heck::{ToLowerCamelCase, ToSnakeCase};

/// Identifier case conversions used by generators.
pub trait NamingConvention {
    /// `accountId` -> `account_id`
    fn to_snake_case(&self, name: &str) -> String;

    /// `account_id` -> `accountId`
    fn to_camel_case(&self, name: &str) -> String;
}

/// [`NamingConvention`] backed by `heck`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeckNaming;

impl NamingConvention for HeckNaming {
    fn to_snake_case(&self, name: &str) -> String {
        name.to_snake_case()
    }

    fn to_camel_case(&self, name: &str) -> String {
        name.to_lower_camel_case()
    }
}
