//! Rule records and the per-form rule tables.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::field::FieldName;
use crate::error::CoreError;

/// Minimum length of a first or last name.
pub const NAME_MIN_LEN: usize = 3;

/// Minimum length of a street address.
pub const ADDRESS_MIN_LEN: usize = 10;

/// Digit count bounds for postal codes.
pub const POSTAL_CODE_DIGITS: (usize, usize) = (3, 5);

/// A form that submits validated input. Each form has its own rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormContext {
    FarmerProfile,
    AddEmployee,
    EmployeeProfile,
    FleetManagerProfile,
}

impl FormContext {
    pub const ALL: [FormContext; 4] = [
        FormContext::FarmerProfile,
        FormContext::AddEmployee,
        FormContext::EmployeeProfile,
        FormContext::FleetManagerProfile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormContext::FarmerProfile => "farmer_profile",
            FormContext::AddEmployee => "add_employee",
            FormContext::EmployeeProfile => "employee_profile",
            FormContext::FleetManagerProfile => "fleet_manager_profile",
        }
    }

    /// Fields the form submits, in display order.
    pub fn fields(self) -> &'static [FieldName] {
        use FieldName::*;
        match self {
            FormContext::FarmerProfile => &[
                FirstName, LastName, Email, Mobile, Nic, Address, PostalCode,
            ],
            FormContext::AddEmployee => &[
                FirstName, LastName, Email, ContactNumber, Nic, Role, Address,
            ],
            FormContext::EmployeeProfile => &[
                FirstName, LastName, Email, ContactNumber, Role, Address, PostalCode,
            ],
            FormContext::FleetManagerProfile => &[FirstName, LastName, Email, Mobile, Address],
        }
    }

    /// Phone number convention the form enforces.
    pub fn mobile_rule(self) -> MobileRule {
        match self {
            FormContext::EmployeeProfile => MobileRule::DigitRange { min: 9, max: 12 },
            _ => MobileRule::LocalMobile,
        }
    }
}

impl fmt::Display for FormContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormContext {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormContext::ALL
            .into_iter()
            .find(|ctx| ctx.as_str() == s)
            .ok_or_else(|| CoreError::UnknownContext(s.to_string()))
    }
}

/// Accepted shape of a phone number, checked against its digits only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileRule {
    /// Exactly nine digits with a leading `7`.
    LocalMobile,
    /// Any digit count in `min..=max`.
    DigitRange { min: usize, max: usize },
}

impl MobileRule {
    pub fn accepts(self, digits: &str) -> bool {
        match self {
            MobileRule::LocalMobile => digits.len() == 9 && digits.starts_with('7'),
            MobileRule::DigitRange { min, max } => (min..=max).contains(&digits.len()),
        }
    }

    pub fn message(self, label: &str) -> String {
        match self {
            MobileRule::LocalMobile => format!("{label} must be 9 digits and start with 7."),
            MobileRule::DigitRange { min, max } => {
                format!("{label} must be between {min} and {max} digits.")
            }
        }
    }
}

/// How an email domain is compared against the typo table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypoMatch {
    /// The whole domain must equal a known typo.
    #[default]
    Exact,
    /// The domain only has to contain a known typo.
    Contains,
}

impl FromStr for TypoMatch {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(TypoMatch::Exact),
            "contains" => Ok(TypoMatch::Contains),
            other => Err(CoreError::Validation(format!(
                "typo match mode must be 'exact' or 'contains', got '{other}'"
            ))),
        }
    }
}

/// The check applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Required, at least [`NAME_MIN_LEN`] characters, ASCII letters only.
    PersonName,
    Email(TypoMatch),
    /// Required; digits (separators stripped) must satisfy the rule.
    PhoneNumber(MobileRule),
    /// Optional; 3 to 5 digits when present.
    PostalCode,
    /// Optional; at least [`ADDRESS_MIN_LEN`] characters when present.
    Address,
    /// Required selection.
    Role,
    /// Required; `123456789V` style or twelve digits.
    Nic,
}

/// Field-to-rule dispatch table for one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    context: FormContext,
    rules: BTreeMap<FieldName, FieldRule>,
}

impl RuleSet {
    pub fn for_context(context: FormContext) -> Self {
        let mobile = context.mobile_rule();
        let typo = TypoMatch::default();

        let rules = BTreeMap::from([
            (FieldName::FirstName, FieldRule::PersonName),
            (FieldName::LastName, FieldRule::PersonName),
            (FieldName::Email, FieldRule::Email(typo)),
            (FieldName::Mobile, FieldRule::PhoneNumber(mobile)),
            (FieldName::ContactNumber, FieldRule::PhoneNumber(mobile)),
            (FieldName::PostalCode, FieldRule::PostalCode),
            (FieldName::Address, FieldRule::Address),
            (FieldName::Role, FieldRule::Role),
            (FieldName::Nic, FieldRule::Nic),
        ]);

        Self { context, rules }
    }

    pub fn with_typo_match(mut self, mode: TypoMatch) -> Self {
        self.rules.insert(FieldName::Email, FieldRule::Email(mode));
        self
    }

    pub fn context(&self) -> FormContext {
        self.context
    }

    /// Rule for `field`, or `None` when the field is unchecked.
    pub fn rule_for(&self, field: FieldName) -> Option<FieldRule> {
        self.rules.get(&field).copied()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::for_context(FormContext::FarmerProfile)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn local_mobile_requires_nine_digits_starting_with_seven() {
        let rule = MobileRule::LocalMobile;
        assert!(rule.accepts("712345678"));
        assert!(!rule.accepts("812345678"));
        assert!(!rule.accepts("71234567"));
        assert!(!rule.accepts("7123456789"));
    }

    #[test]
    fn digit_range_is_inclusive() {
        let rule = MobileRule::DigitRange { min: 9, max: 12 };
        assert!(rule.accepts("812345678"));
        assert!(rule.accepts("947123456789"));
        assert!(!rule.accepts("12345678"));
        assert!(!rule.accepts("9471234567890"));
    }

    #[test]
    fn only_employee_profile_uses_digit_range() {
        for ctx in FormContext::ALL {
            let expected = if ctx == FormContext::EmployeeProfile {
                MobileRule::DigitRange { min: 9, max: 12 }
            } else {
                MobileRule::LocalMobile
            };
            assert_eq!(ctx.mobile_rule(), expected, "{ctx}");
        }
    }

    #[test]
    fn every_context_field_has_a_rule() {
        for ctx in FormContext::ALL {
            let rules = RuleSet::for_context(ctx);
            for field in ctx.fields() {
                assert!(rules.rule_for(*field).is_some(), "{ctx}: {field}");
            }
        }
    }

    #[test]
    fn typo_override_only_touches_email() {
        let rules = RuleSet::default().with_typo_match(TypoMatch::Contains);
        assert_eq!(
            rules.rule_for(FieldName::Email),
            Some(FieldRule::Email(TypoMatch::Contains))
        );
        assert_eq!(
            rules.rule_for(FieldName::Mobile),
            Some(FieldRule::PhoneNumber(MobileRule::LocalMobile))
        );
    }

    #[test]
    fn context_parses_from_wire_name() {
        assert_eq!(
            "employee_profile".parse::<FormContext>().unwrap(),
            FormContext::EmployeeProfile
        );
        assert_matches!(
            "checkout".parse::<FormContext>(),
            Err(CoreError::UnknownContext(_))
        );
    }

    #[test]
    fn typo_match_parses_config_values() {
        assert_eq!(" Contains ".parse::<TypoMatch>().unwrap(), TypoMatch::Contains);
        assert_eq!("exact".parse::<TypoMatch>().unwrap(), TypoMatch::Exact);
        assert!("fuzzy".parse::<TypoMatch>().is_err());
    }
}
