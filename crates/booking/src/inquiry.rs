use serde::Deserialize;

use crate::Field;

/// One booking inquiry: the five user-submitted fields. Created fresh per
/// form session and cleared again on a successful submit or reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BookingInquiry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub details: String,
}

impl BookingInquiry {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Event => &self.event,
            Field::Details => &self.details,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Event => self.event = value,
            Field::Details => self.details = value,
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
