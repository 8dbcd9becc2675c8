/// Submission lifecycle of one form mount.
///
/// `Idle -> Submitting -> Submitted` on the happy path,
/// `Submitting -> Failed` when the hand-off raises, `Failed -> Submitting`
/// on retry, `Submitted -> Idle` on an explicit reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

impl SubmissionState {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
