use urlencoding::encode;

use crate::{BookingInquiry, Field};

const HEADER: &str = "🎶 New Booking Inquiry 🎶";
const RULE: &str = "----------------------------------";

/// Compose the pre-filled WhatsApp deep link for an inquiry.
///
/// Template boilerplate and every interpolated field value are
/// percent-encoded independently, so reserved characters in user input
/// (`&`, `#`, ...) cannot break the URL. The `%0A` line separator and the
/// `?text=` query are the only literal URL syntax in the payload.
pub fn booking_link(recipient: &str, site_name: &str, inquiry: &BookingInquiry) -> String {
    let lines = [
        encode(HEADER).into_owned(),
        encode(RULE).into_owned(),
        labeled("👤 Name: ", inquiry.value(Field::Name)),
        labeled("📞 Phone: ", inquiry.value(Field::Phone)),
        labeled("✉️ Email: ", inquiry.value(Field::Email)),
        labeled("📅 Event Date & Venue: ", inquiry.value(Field::Event)),
        labeled("📝 Details: ", inquiry.value(Field::Details)),
        encode(RULE).into_owned(),
        labeled("Sent from ", site_name),
    ];

    format!("https://wa.me/{recipient}?text={}", lines.join("%0A"))
}

fn labeled(label: &str, value: &str) -> String {
    format!("{}{}", encode(label), encode(value))
}
