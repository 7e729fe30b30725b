//! Job-role labels offered by the employee and fleet forms.
//!
//! The labels are what the frontend dropdowns display and submit verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_FARMER: &str = "Farmer";
pub const ROLE_DRIVER: &str = "Driver";
pub const ROLE_FLEET_MANAGER: &str = "Fleet Manager";
pub const ROLE_INVENTORY_MANAGER: &str = "Inventory Manager";
pub const ROLE_SALES_REPRESENTATIVE: &str = "Sales Representative";

/// A selectable job role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeRole {
    #[serde(rename = "Farmer")]
    Farmer,
    #[serde(rename = "Driver")]
    Driver,
    #[serde(rename = "Fleet Manager")]
    FleetManager,
    #[serde(rename = "Inventory Manager")]
    InventoryManager,
    #[serde(rename = "Sales Representative")]
    SalesRepresentative,
}

impl EmployeeRole {
    /// Every role, in dropdown order.
    pub const ALL: [EmployeeRole; 5] = [
        EmployeeRole::Farmer,
        EmployeeRole::Driver,
        EmployeeRole::FleetManager,
        EmployeeRole::InventoryManager,
        EmployeeRole::SalesRepresentative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EmployeeRole::Farmer => ROLE_FARMER,
            EmployeeRole::Driver => ROLE_DRIVER,
            EmployeeRole::FleetManager => ROLE_FLEET_MANAGER,
            EmployeeRole::InventoryManager => ROLE_INVENTORY_MANAGER,
            EmployeeRole::SalesRepresentative => ROLE_SALES_REPRESENTATIVE,
        }
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmployeeRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        EmployeeRole::ALL
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::Validation(format!("unknown role '{s}'")))
    }
}
