//! State tags for outcomes.
//!
//! Every outcome is in exactly one of four states. The tag can be read
//! without settling a pending outcome, unlike the boolean state flags.

use serde::{Deserialize, Serialize};

/// The state an outcome is in.
///
/// `Aborted` is a sub-case of error: [`OutcomeState::is_error`] holds for
/// both `Error` and `Aborted`. `Pending` is orthogonal to the other three;
/// it describes an outcome whose state is not yet known.
///
/// # Example
///
/// ```rust
/// use fate::{Outcome, OutcomeState};
///
/// let outcome: Outcome<i32, String> = Outcome::Aborted("disk gone".into());
/// let state = outcome.state();
///
/// assert_eq!(state, OutcomeState::Aborted);
/// assert_eq!(state.name(), "Aborted");
/// assert!(state.is_error());
/// assert!(state.is_settled());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum OutcomeState {
    Ok,
    Error,
    Aborted,
    Pending,
}

impl OutcomeState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::Error => "Error",
            Self::Aborted => "Aborted",
            Self::Pending => "Pending",
        }
    }

    /// Check if the state is settled (anything but `Pending`).
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Check if this is an error state, recoverable or not.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error | Self::Aborted)
    }
}
