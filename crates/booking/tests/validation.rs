use musicaholic_booking::{Field, SubmissionState};
use strum::VariantArray;

mod helpers;

#[test]
fn fresh_form_is_not_submittable() {
    let form = helpers::empty_form();

    assert!(!form.is_submittable());
    assert_eq!(*form.state(), SubmissionState::Idle);
}

#[test]
fn reference_inquiry_is_submittable() {
    assert!(helpers::filled_form().is_submittable());
}

#[test]
fn name_length_bounds() {
    assert!(Field::Name.check("A").is_err());
    assert!(Field::Name.check("Al").is_ok());
    assert!(Field::Name.check(&"x".repeat(50)).is_ok());
    assert!(Field::Name.check(&"x".repeat(51)).is_err());
}

#[test]
fn event_and_details_length_bounds() {
    assert!(Field::Event.check("gig").is_err());
    assert!(Field::Event.check("2024-05-01, City Hall").is_ok());
    assert!(Field::Event.check(&"x".repeat(81)).is_err());

    assert!(Field::Details.check("too short").is_err());
    assert!(Field::Details.check("a ten-char.").is_ok());
    assert!(Field::Details.check(&"x".repeat(500)).is_ok());
    assert!(Field::Details.check(&"x".repeat(501)).is_err());
}

#[test]
fn phone_is_strictly_digits_within_bounds() {
    assert!(Field::Phone.check("9876543210").is_ok());
    assert!(Field::Phone.check("987654321012345").is_ok());
    assert!(Field::Phone.check("9876543210123456").is_err());
    assert!(Field::Phone.check("98-76543210").is_err());
    assert!(Field::Phone.check("phone12345").is_err());
}

#[test]
fn short_phone_reports_at_least_ten() {
    let message = Field::Phone.check("123").unwrap_err();
    assert!(message.contains("at least 10"), "unexpected message: {message}");

    let mut form = helpers::filled_form();
    form.set_field(Field::Phone, "123");
    assert!(!form.is_submittable());
}

#[test]
fn email_grammar() {
    assert!(Field::Email.check("not-an-email").is_err());
    assert!(Field::Email.check("missing-domain@").is_err());
    assert!(Field::Email.check("dotless@domain").is_err());
    assert!(Field::Email.check("name@domain.tld").is_ok());
}

#[test]
fn any_single_invalid_field_blocks_submission() {
    for field in Field::VARIANTS.iter().copied() {
        let mut form = helpers::filled_form();
        form.set_field(field, "");
        assert!(
            !form.is_submittable(),
            "{field} invalid but form still submittable"
        );
    }
}

#[test]
fn correcting_the_last_invalid_field_flips_submittable() {
    let mut form = helpers::filled_form();
    form.set_field(Field::Email, "not-an-email");
    assert!(!form.is_submittable());
    assert!(form.field_error(Field::Email).is_some());

    form.set_field(Field::Email, "a@b.co");
    assert!(form.is_submittable());
    assert!(form.field_error(Field::Email).is_none());
}

#[test]
fn set_field_records_inline_message() {
    let mut form = helpers::empty_form();
    form.set_field(Field::Name, "A");

    let message = form.field_error(Field::Name).unwrap();
    assert!(message.contains("at least 2"));

    // Other fields are untouched until edited or submitted.
    assert!(form.field_error(Field::Phone).is_none());
}
