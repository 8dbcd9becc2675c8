//! Booking form route handlers
//!
//! The rendering layer around the booking engine: forwards the posted
//! inquiry into a fresh engine instance, re-renders the form with inline
//! messages when it is not submittable, and otherwise renders the success
//! view carrying the composed WhatsApp deep link.

use std::sync::Mutex;

use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use musicaholic_booking::{BookingError, BookingForm, BookingInquiry, Field, LinkOpener};
use strum::VariantArray;
use tracing::{info, warn};

use super::{AppState, render_template};
use crate::error::AppError;

/// Flattened view of the engine for the form partial.
#[derive(Default)]
pub struct BookingFormView {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub event: String,
    pub details: String,
    pub name_error: Option<String>,
    pub phone_error: Option<String>,
    pub email_error: Option<String>,
    pub event_error: Option<String>,
    pub details_error: Option<String>,
}

impl BookingFormView {
    fn from_engine(engine: &BookingForm) -> Self {
        Self {
            name: engine.value(Field::Name).to_owned(),
            phone: engine.value(Field::Phone).to_owned(),
            email: engine.value(Field::Email).to_owned(),
            event: engine.value(Field::Event).to_owned(),
            details: engine.value(Field::Details).to_owned(),
            name_error: engine.field_error(Field::Name).map(str::to_owned),
            phone_error: engine.field_error(Field::Phone).map(str::to_owned),
            email_error: engine.field_error(Field::Email).map(str::to_owned),
            event_error: engine.field_error(Field::Event).map(str::to_owned),
            details_error: engine.field_error(Field::Details).map(str::to_owned),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/booking/form.html")]
pub struct BookingFormTemplate {
    pub form: BookingFormView,
}

#[derive(askama::Template)]
#[template(path = "partials/booking/success.html")]
pub struct BookingSuccessTemplate {
    pub whatsapp_url: String,
}

/// Opener adapter for the server rendition: "opening" the link means
/// capturing the URL so the response can hand it to the visitor's browser.
#[derive(Default)]
struct CaptureOpener {
    url: Mutex<Option<String>>,
}

impl CaptureOpener {
    fn take(&self) -> Option<String> {
        self.url.lock().ok().and_then(|mut url| url.take())
    }
}

impl LinkOpener for CaptureOpener {
    fn open(&self, url: &str) -> anyhow::Result<()> {
        *self
            .url
            .lock()
            .map_err(|_| anyhow::anyhow!("link capture poisoned"))? = Some(url.to_owned());
        Ok(())
    }
}

/// POST /booking - validate the inquiry and hand it off to WhatsApp
pub async fn submit(
    State(app): State<AppState>,
    Form(inquiry): Form<BookingInquiry>,
) -> Response {
    let mut engine = BookingForm::new(
        app.config.booking.whatsapp_number.clone(),
        app.config.site.name.clone(),
    );
    for field in Field::VARIANTS.iter().copied() {
        engine.set_field(field, inquiry.value(field));
    }

    if !engine.is_submittable() {
        // Run the full submit-time validation pass so every invalid field
        // carries its inline message, then re-render.
        if let Err(err) = engine.begin_submit() {
            warn!(error = %err, "Booking inquiry rejected by validation");
        }
        return render_template(BookingFormTemplate {
            form: BookingFormView::from_engine(&engine),
        });
    }

    let opener = CaptureOpener::default();
    match engine.submit(&opener) {
        Ok(()) => match opener.take() {
            Some(whatsapp_url) => {
                info!("Booking inquiry handed off");
                render_template(BookingSuccessTemplate { whatsapp_url })
            }
            None => AppError::Booking(BookingError::SubmissionFailed(
                "link opener returned no url".to_string(),
            ))
            .into_response(),
        },
        Err(err) => AppError::from(err).into_response(),
    }
}
