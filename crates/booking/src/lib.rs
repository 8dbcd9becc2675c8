//! Booking inquiry engine for the Musicaholic band site.
//!
//! Owns field state, per-field validation, the submission state machine and
//! the construction of the outbound WhatsApp deep link. The engine performs
//! no I/O of its own; the hand-off goes through [`LinkOpener`].

mod error;
mod field;
mod form;
mod inquiry;
mod message;
mod state;

pub use error::BookingError;
pub use field::{Constraint, Field};
pub use form::{BookingForm, LinkOpener};
pub use inquiry::BookingInquiry;
pub use message::booking_link;
pub use state::SubmissionState;
