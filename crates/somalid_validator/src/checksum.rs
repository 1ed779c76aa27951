//! Optional check-digit verification for id numbers.
//!
//! No check-digit scheme is published for Somali national ids, so the gate
//! is disabled by default and record validation never consults it. Callers
//! that know their issuer's scheme can enable it explicitly.

use std::fmt;

/// A check-digit algorithm over a string of ASCII digits.
pub trait ChecksumVerifier: Send + Sync {
    /// Short name of the algorithm, e.g. `"luhn"`.
    fn name(&self) -> &str;

    /// Returns true if `digits` carries a valid check digit.
    fn verify(&self, digits: &str) -> bool;
}

/// The Luhn (mod 10) algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Luhn;

impl ChecksumVerifier for Luhn {
    fn name(&self) -> &str {
        "luhn"
    }

    fn verify(&self, digits: &str) -> bool {
        luhn_check(digits)
    }
}

/// Luhn check over ASCII digits. Empty input and non-digits fail.
///
/// ```rust
/// use somalid_validator::luhn_check;
///
/// assert!(luhn_check("79927398713"));
/// assert!(!luhn_check("79927398710"));
/// ```
pub fn luhn_check(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0;
    for (position, c) in digits.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if position % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

/// Switchable checksum stage.
#[derive(Default)]
pub struct ChecksumGate {
    verifier: Option<Box<dyn ChecksumVerifier>>,
}

impl ChecksumGate {
    /// A gate that accepts everything.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// A gate enforcing the Luhn algorithm.
    pub fn luhn() -> Self {
        Self::with_verifier(Box::new(Luhn))
    }

    /// A gate enforcing `verifier`.
    pub fn with_verifier(verifier: Box<dyn ChecksumVerifier>) -> Self {
        Self {
            verifier: Some(verifier),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.verifier.is_some()
    }

    /// Returns true if `digits` passes, or if the gate is disabled.
    pub fn check(&self, digits: &str) -> bool {
        self.verifier
            .as_ref()
            .is_none_or(|verifier| verifier.verify(digits))
    }
}

impl fmt::Debug for ChecksumGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChecksumGate")
            .field("verifier", &self.verifier.as_ref().map(|v| v.name()))
            .finish()
    }
}
