//! Email checks and the static lookup tables they rely on.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::rules::TypoMatch;

/// Minimal `local@domain.tld` shape: no whitespace, exactly one `@`, and a
/// dot somewhere after it.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Commonly mistyped mail domains and what the user almost certainly meant.
pub static DOMAIN_TYPOS: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("gamil.com", "gmail.com"),
        ("hotnail.com", "hotmail.com"),
        ("yahhoo.com", "yahoo.com"),
    ])
});

/// Accepted top-level domains, dot included.
pub const ALLOWED_TLDS: [&str; 5] = [".com", ".net", ".org", ".edu", ".lk"];

pub const MSG_EMAIL_REQUIRED: &str = "Email is required.";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address.";

/// Look up a typo in `domain` (already lowercased).
///
/// Returns the matched typo key together with its correction.
pub fn find_typo(domain: &str, mode: TypoMatch) -> Option<(&'static str, &'static str)> {
    match mode {
        TypoMatch::Exact => DOMAIN_TYPOS
            .get_key_value(domain)
            .map(|(typo, fix)| (*typo, *fix)),
        TypoMatch::Contains => DOMAIN_TYPOS
            .iter()
            .find(|(typo, _)| domain.contains(**typo))
            .map(|(typo, fix)| (*typo, *fix)),
    }
}

/// The trailing `.segment` of a domain, if it has one.
pub fn top_level_domain(domain: &str) -> Option<&str> {
    domain.rfind('.').map(|idx| &domain[idx..])
}

/// Check an already-trimmed email address.
///
/// Checks run in order and the first failure wins: presence, shape, known
/// domain typo, allowed TLD.
pub fn check_email(email: &str, mode: TypoMatch) -> Option<String> {
    if email.is_empty() {
        return Some(MSG_EMAIL_REQUIRED.to_string());
    }
    if !EMAIL_RE.is_match(email) {
        return Some(MSG_EMAIL_INVALID.to_string());
    }

    let (local, domain) = email.rsplit_once('@')?;
    let domain = domain.to_ascii_lowercase();

    if let Some((typo, fix)) = find_typo(&domain, mode) {
        let corrected = domain.replacen(typo, fix, 1);
        return Some(format!("Did you mean {local}@{corrected}?"));
    }

    match top_level_domain(&domain) {
        Some(tld) if ALLOWED_TLDS.iter().any(|allowed| *allowed == tld) => None,
        _ => Some(format!(
            "Email domain must end with one of: {}.",
            ALLOWED_TLDS.join(", ")
        )),
    }
}
