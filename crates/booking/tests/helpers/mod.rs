use std::sync::Mutex;

use musicaholic_booking::{BookingForm, Field, LinkOpener};

pub const RECIPIENT: &str = "918303860422";
pub const SITE_NAME: &str = "MUSICAHOLIC द Band Website";

/// Opener test double: records every hand-off, or refuses them all.
#[derive(Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingOpener {
    pub fn failing() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("browser refused to open the link");
        }
        self.opened.lock().unwrap().push(url.to_owned());
        Ok(())
    }
}

pub fn empty_form() -> BookingForm {
    BookingForm::new(RECIPIENT, SITE_NAME)
}

/// A form filled with the five valid reference values.
pub fn filled_form() -> BookingForm {
    let mut form = empty_form();
    form.set_field(Field::Name, "Ravi Kumar");
    form.set_field(Field::Phone, "9876543210");
    form.set_field(Field::Email, "ravi@example.com");
    form.set_field(Field::Event, "2024-05-01, City Hall");
    form.set_field(
        Field::Details,
        "Need a 2-hour acoustic set for a wedding reception.",
    );
    form
}
