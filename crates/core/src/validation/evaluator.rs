//! Field validator: pure logic, no I/O.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::email::check_email;
use super::field::FieldName;
use super::input::RawInput;
use super::rules::{FieldRule, RuleSet, ADDRESS_MIN_LEN, NAME_MIN_LEN, POSTAL_CODE_DIGITS};

/// Nine digits plus a `V`/`X` suffix (old format) or twelve digits (new).
static NIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d{9}[VvXx]|\d{12})$").expect("valid regex"));

/// Field-to-message map. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    fn single(field: FieldName, message: String) -> Self {
        Self {
            errors: BTreeMap::from([(field, message)]),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FieldName, String> {
        self.errors.iter()
    }

    /// Union of both results. On a shared field the message from `other`
    /// wins; a field valid in `other` keeps whatever `self` had.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Replace the outcome for `field` with a fresh re-check of it. A valid
    /// `latest` clears any earlier message for the field.
    pub fn merge_field(&mut self, field: FieldName, latest: ValidationResult) {
        self.errors.remove(&field);
        self.errors.extend(latest.errors);
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = (&'a FieldName, &'a String);
    type IntoIter = btree_map::Iter<'a, FieldName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Validates form fields against one form's rule table.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: RuleSet,
}

impl Validator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate one field. The result holds at most one entry, for `field`.
    pub fn validate(&self, field: FieldName, value: impl Into<RawInput>) -> ValidationResult {
        let Some(rule) = self.rules.rule_for(field) else {
            return ValidationResult::new();
        };

        let input = value.into();
        match evaluate_rule(field, rule, &input) {
            Some(message) => {
                tracing::debug!(field = %field, error = %message, "Field failed validation");
                ValidationResult::single(field, message)
            }
            None => ValidationResult::new(),
        }
    }

    /// Validate a field by its wire name. Unknown names pass.
    pub fn validate_named(&self, field: &str, value: impl Into<RawInput>) -> ValidationResult {
        match field.parse::<FieldName>() {
            Ok(field) => self.validate(field, value),
            Err(_) => {
                tracing::debug!(field, "No rule for field, skipping");
                ValidationResult::new()
            }
        }
    }

    /// Validate a whole submitted record.
    ///
    /// Every field of the form is checked, with missing keys treated as
    /// empty input. Known fields outside the form are checked too; unknown
    /// keys are ignored. When a record carries both the wire name and an
    /// alias of one field (`first_name` and `firstName`), the wire name wins.
    pub fn validate_record(&self, record: &Map<String, Value>) -> ValidationResult {
        let mut values: BTreeMap<FieldName, &Value> = BTreeMap::new();
        for (key, value) in record {
            match key.parse::<FieldName>() {
                Ok(field) => {
                    let canonical = key == field.as_str();
                    match values.entry(field) {
                        btree_map::Entry::Vacant(slot) => {
                            slot.insert(value);
                        }
                        btree_map::Entry::Occupied(mut slot) => {
                            tracing::debug!(
                                field = %field,
                                key = %key,
                                "Record has both wire name and alias for field"
                            );
                            if canonical {
                                slot.insert(value);
                            }
                        }
                    }
                }
                Err(_) => tracing::trace!(field = %key, "Ignoring unknown record key"),
            }
        }

        let mut result = ValidationResult::new();
        for field in self.rules.context().fields() {
            result.merge(self.validate(*field, values.get(field).copied()));
        }
        for (field, value) in &values {
            if !self.rules.context().fields().contains(field) {
                result.merge(self.validate(*field, *value));
            }
        }

        tracing::debug!(
            context = %self.rules.context(),
            invalid_fields = result.len(),
            "Record validated"
        );
        result
    }
}

/// Validate one field with the default (farmer profile) rule table.
pub fn validate(field: FieldName, value: impl Into<RawInput>) -> ValidationResult {
    Validator::default().validate(field, value)
}

fn evaluate_rule(field: FieldName, rule: FieldRule, input: &RawInput) -> Option<String> {
    let label = field.label();
    match rule {
        FieldRule::PersonName => evaluate_person_name(label, input),
        FieldRule::Email(mode) => check_email(input.as_str(), mode),
        FieldRule::PhoneNumber(mobile) => {
            let digits = input.digits();
            if digits.is_empty() {
                Some(format!("{label} is required."))
            } else if !mobile.accepts(&digits) {
                Some(mobile.message(label))
            } else {
                None
            }
        }
        FieldRule::PostalCode => evaluate_postal_code(input),
        FieldRule::Address => {
            if !input.is_empty() && input.as_str().chars().count() < ADDRESS_MIN_LEN {
                Some(format!(
                    "Address must be at least {ADDRESS_MIN_LEN} characters long."
                ))
            } else {
                None
            }
        }
        FieldRule::Role => input.is_empty().then(|| "Role is required.".to_string()),
        FieldRule::Nic => {
            if input.is_empty() {
                Some("NIC is required.".to_string())
            } else if !NIC_RE.is_match(input.as_str()) {
                Some("NIC must be 9 digits followed by V or X, or 12 digits.".to_string())
            } else {
                None
            }
        }
    }
}

fn evaluate_person_name(label: &str, input: &RawInput) -> Option<String> {
    let name = input.as_str();
    if name.is_empty() {
        return Some(format!("{label} is required."));
    }
    if name.chars().count() < NAME_MIN_LEN {
        return Some(format!(
            "{label} must be at least {NAME_MIN_LEN} characters long."
        ));
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(format!("{label} can only contain letters."));
    }
    None
}

fn evaluate_postal_code(input: &RawInput) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    let (min, max) = POSTAL_CODE_DIGITS;
    let code = input.as_str();
    let well_formed =
        (min..=max).contains(&code.len()) && code.chars().all(|c| c.is_ascii_digit());
    if well_formed {
        None
    } else {
        Some(format!("Postal code must be {min} to {max} digits."))
    }
}
