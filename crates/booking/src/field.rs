use std::sync::LazyLock;

use regex::Regex;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::ValidateEmail;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// The five inquiry fields, in the order they appear on the form.
#[derive(
    VariantArray, Display, EnumString, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Email,
    Event,
    Details,
}

impl Field {
    pub const COUNT: usize = Self::VARIANTS.len();

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Constraint descriptor for this field.
    pub fn constraint(self) -> Constraint {
        match self {
            Field::Name => Constraint::Length { min: 2, max: 50 },
            Field::Phone => Constraint::Digits { min: 10, max: 15 },
            Field::Email => Constraint::Email,
            Field::Event => Constraint::Length { min: 5, max: 80 },
            Field::Details => Constraint::Length { min: 10, max: 500 },
        }
    }

    pub fn check(self, value: &str) -> Result<(), String> {
        self.constraint().check(value)
    }
}

/// Validation rule kinds. Checks are pure and stateless: the same input
/// always yields the same verdict, and nothing here panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    Length { min: usize, max: usize },
    Digits { min: usize, max: usize },
    Email,
}

impl Constraint {
    pub fn check(&self, value: &str) -> Result<(), String> {
        match *self {
            Constraint::Length { min, max } => check_length(value, min, max, "characters"),
            Constraint::Digits { min, max } => {
                check_length(value, min, max, "digits")?;
                if !DIGITS.is_match(value) {
                    return Err("may only contain digits".to_owned());
                }
                Ok(())
            }
            Constraint::Email => {
                if value.validate_email() && domain_has_dot(value) {
                    Ok(())
                } else {
                    Err("please enter a valid email address".to_owned())
                }
            }
        }
    }
}

fn check_length(value: &str, min: usize, max: usize, unit: &str) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        return Err(format!("must be at least {min} {unit}"));
    }
    if len > max {
        return Err(format!("must be at most {max} {unit}"));
    }
    Ok(())
}

// The HTML5 email grammar used by the validator crate accepts dotless
// domains such as user@localhost; the inquiry form does not.
fn domain_has_dot(value: &str) -> bool {
    value
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_fails_every_field() {
        for field in Field::VARIANTS.iter().copied() {
            assert!(field.check("").is_err(), "{field} accepted an empty value");
        }
    }

    #[test]
    fn length_bounds_count_characters_not_bytes() {
        // Two Devanagari characters, six bytes.
        assert!(Field::Name.check("दद").is_ok());
    }

    #[test]
    fn email_requires_at_and_domain_dot() {
        assert!(Constraint::Email.check("not-an-email").is_err());
        assert!(Constraint::Email.check("foo@bar").is_err());
        assert!(Constraint::Email.check("a@b.co").is_ok());
        assert!(Constraint::Email.check("name@domain.tld").is_ok());
    }

    #[test]
    fn phone_rejects_letters_and_symbols() {
        assert!(Field::Phone.check("98765abcde").is_err());
        assert!(Field::Phone.check("+9876543210").is_err());
        assert!(Field::Phone.check("9876543210").is_ok());
    }

    #[test]
    fn short_phone_reports_minimum() {
        let message = Field::Phone.check("123").unwrap_err();
        assert!(message.contains("at least 10"), "unexpected message: {message}");
    }
}
