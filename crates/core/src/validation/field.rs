//! Field identifiers understood by the validator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A form input subject to validation.
///
/// Wire names follow what the forms submit: mostly snake_case, with
/// `postalCode` kept in camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "first_name", alias = "firstName")]
    FirstName,
    #[serde(rename = "last_name", alias = "lastName")]
    LastName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "mobile")]
    Mobile,
    #[serde(rename = "contact_number", alias = "contactNumber")]
    ContactNumber,
    #[serde(rename = "postalCode", alias = "postal_code")]
    PostalCode,
    #[serde(rename = "address")]
    Address,
    #[serde(rename = "role")]
    Role,
    #[serde(rename = "nic")]
    Nic,
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Mobile,
        FieldName::ContactNumber,
        FieldName::PostalCode,
        FieldName::Address,
        FieldName::Role,
        FieldName::Nic,
    ];

    /// Canonical wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "first_name",
            FieldName::LastName => "last_name",
            FieldName::Email => "email",
            FieldName::Mobile => "mobile",
            FieldName::ContactNumber => "contact_number",
            FieldName::PostalCode => "postalCode",
            FieldName::Address => "address",
            FieldName::Role => "role",
            FieldName::Nic => "nic",
        }
    }

    /// Human label used at the start of error messages.
    pub fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First name",
            FieldName::LastName => "Last name",
            FieldName::Email => "Email",
            FieldName::Mobile => "Mobile number",
            FieldName::ContactNumber => "Contact number",
            FieldName::PostalCode => "Postal code",
            FieldName::Address => "Address",
            FieldName::Role => "Role",
            FieldName::Nic => "NIC",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_name" | "firstName" => Ok(FieldName::FirstName),
            "last_name" | "lastName" => Ok(FieldName::LastName),
            "email" => Ok(FieldName::Email),
            "mobile" => Ok(FieldName::Mobile),
            "contact_number" | "contactNumber" => Ok(FieldName::ContactNumber),
            "postalCode" | "postal_code" => Ok(FieldName::PostalCode),
            "address" => Ok(FieldName::Address),
            "role" => Ok(FieldName::Role),
            "nic" => Ok(FieldName::Nic),
            other => Err(CoreError::UnknownField(other.to_string())),
        }
    }
}
