use thiserror::Error;

use crate::Field;

/// Everything here is recoverable; the form always stays in a state from
/// which the user can correct input and retry.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// A field failed its constraint; surfaced inline next to the field.
    #[error("{field}: {message}")]
    Validation { field: Field, message: String },

    /// Submit was called while a submission is already in flight. The
    /// rendering layer should have disabled the control; this is the
    /// engine-level backstop.
    #[error("a booking submission is already in progress")]
    ConcurrentSubmission,

    #[error("inquiry already submitted; reset the form to send another")]
    AlreadySubmitted,

    /// Hand-off to the link opener failed; field values are retained so the
    /// user can retry without re-entering them.
    #[error("submission failed: {0}")]
    SubmissionFailed(String),

    #[error("reset is only valid after a successful submission")]
    InvalidReset,
}
