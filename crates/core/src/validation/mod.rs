//! Form-field validation engine.
//!
//! Provides the closed set of field identifiers, per-form rule tables, the
//! static email lookup tables, and a pure-logic evaluator.

pub mod email;
pub mod evaluator;
pub mod field;
pub mod input;
pub mod rules;

pub use evaluator::{validate, ValidationResult, Validator};
pub use field::FieldName;
pub use input::RawInput;
pub use rules::{FieldRule, FormContext, MobileRule, RuleSet, TypoMatch};
