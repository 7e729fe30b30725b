//! Form-input validation for the Harvest farm-produce marketplace.
//!
//! Everything in this crate is pure logic: no I/O, no persistence, no shared
//! mutable state. Callers (form handlers, the HTTP surface in `harvest-api`)
//! pass a field identifier and a raw value and get back a field-to-message
//! map that is empty when the input is acceptable.

pub mod error;
pub mod roles;
pub mod validation;
