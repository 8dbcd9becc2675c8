use strum::VariantArray;

use crate::{BookingError, BookingInquiry, Field, SubmissionState, booking_link};

/// The facility that opens a composed URL in a new context.
///
/// Fire-and-forget: nothing is awaited and no delivery confirmation is read
/// back; an `Err` from `open` is the only failure signal.
pub trait LinkOpener {
    fn open(&self, url: &str) -> anyhow::Result<()>;
}

/// Booking form engine: field values, per-field validation messages and the
/// submission state machine.
///
/// Single-threaded from the caller's perspective; at most one in-flight
/// submission per instance, enforced by the state machine. Independent
/// instances share nothing.
#[derive(Clone, Debug)]
pub struct BookingForm {
    recipient: String,
    site_name: String,
    inquiry: BookingInquiry,
    messages: [Option<String>; Field::COUNT],
    state: SubmissionState,
}

impl BookingForm {
    pub fn new(recipient: impl Into<String>, site_name: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            site_name: site_name.into(),
            inquiry: BookingInquiry::default(),
            messages: Default::default(),
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn inquiry(&self) -> &BookingInquiry {
        &self.inquiry
    }

    pub fn value(&self, field: Field) -> &str {
        self.inquiry.value(field)
    }

    /// Validation message recorded for a field, if its last stored value
    /// failed its constraint.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.messages[field.index()].as_deref()
    }

    /// Store a field value and recompute that field's validation message.
    /// Rejected (returns `false`, nothing changes) while a submission is in
    /// flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.state == SubmissionState::Submitting {
            return false;
        }

        let value = value.into();
        self.messages[field.index()] = field.check(&value).err();
        self.inquiry.set(field, value);
        true
    }

    /// True iff every field independently satisfies its constraint.
    pub fn is_submittable(&self) -> bool {
        Field::VARIANTS
            .iter()
            .all(|field| field.check(self.inquiry.value(*field)).is_ok())
    }

    /// Guarded entry into `Submitting`.
    ///
    /// Re-validates every field and records the messages; on success the
    /// state moves to `Submitting` and the composed deep link is returned
    /// for hand-off. Kept separate from [`submit`](Self::submit) so the
    /// in-flight guard is observable to callers and tests.
    pub fn begin_submit(&mut self) -> Result<String, BookingError> {
        match self.state {
            SubmissionState::Submitting => return Err(BookingError::ConcurrentSubmission),
            SubmissionState::Submitted => return Err(BookingError::AlreadySubmitted),
            SubmissionState::Idle | SubmissionState::Failed(_) => {}
        }

        let mut first = None;
        for field in Field::VARIANTS.iter().copied() {
            let outcome = field.check(self.inquiry.value(field));
            if let Err(message) = &outcome {
                if first.is_none() {
                    first = Some(BookingError::Validation {
                        field,
                        message: message.clone(),
                    });
                }
            }
            self.messages[field.index()] = outcome.err();
        }
        if let Some(err) = first {
            return Err(err);
        }

        self.state = SubmissionState::Submitting;
        Ok(booking_link(&self.recipient, &self.site_name, &self.inquiry))
    }

    /// `Submitting -> Submitted`; clears all fields for the next inquiry.
    pub fn complete_submit(&mut self) {
        debug_assert_eq!(self.state, SubmissionState::Submitting);
        self.state = SubmissionState::Submitted;
        self.inquiry.clear();
        self.messages = Default::default();
    }

    /// `Submitting -> Failed`; field values are retained for a retry.
    pub fn fail_submit(&mut self, reason: impl Into<String>) {
        debug_assert_eq!(self.state, SubmissionState::Submitting);
        self.state = SubmissionState::Failed(reason.into());
    }

    /// Full submission: guard, compose, hand off, settle. Exactly one
    /// hand-off per successful call.
    pub fn submit(&mut self, opener: &dyn LinkOpener) -> Result<(), BookingError> {
        let url = self.begin_submit()?;

        match opener.open(&url) {
            Ok(()) => {
                self.complete_submit();
                Ok(())
            }
            Err(err) => {
                let reason = err.to_string();
                self.fail_submit(reason.clone());
                Err(BookingError::SubmissionFailed(reason))
            }
        }
    }

    /// Back to `Idle` for another inquiry; only valid from `Submitted`.
    pub fn reset(&mut self) -> Result<(), BookingError> {
        if self.state != SubmissionState::Submitted {
            return Err(BookingError::InvalidReset);
        }

        self.inquiry.clear();
        self.messages = Default::default();
        self.state = SubmissionState::Idle;
        Ok(())
    }
}
