//! Termination cause model.
//!
//! The legally classified reason an employment relationship ended. It decides
//! whether the employer owes a severance indemnity.

use serde::{Deserialize, Serialize};

/// Represents why employment ended.
///
/// # Example
///
/// ```
/// use settlement_engine::models::TerminationCause;
///
/// assert!(TerminationCause::UnjustifiedDismissal.grants_indemnity());
/// assert!(!TerminationCause::VoluntaryResignation.grants_indemnity());
/// assert_eq!(TerminationCause::from_code(5), Some(TerminationCause::PensionAward));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationCause {
    /// Dismissed by the employer without just cause.
    UnjustifiedDismissal,
    /// Dismissed by the employer with just cause.
    JustifiedDismissal,
    /// The employee resigned of their own accord.
    VoluntaryResignation,
    /// The employee resigned because of the employer's fault (indirect dismissal).
    ResignationWithJustCause,
    /// Employment ended because the employee was awarded an IGSS pension.
    PensionAward,
}

impl TerminationCause {
    /// Every cause, in code order.
    pub const ALL: [TerminationCause; 5] = [
        TerminationCause::UnjustifiedDismissal,
        TerminationCause::JustifiedDismissal,
        TerminationCause::VoluntaryResignation,
        TerminationCause::ResignationWithJustCause,
        TerminationCause::PensionAward,
    ];

    /// Returns true when the exit is attributable to the employer and indemnity is owed.
    pub fn grants_indemnity(&self) -> bool {
        !matches!(
            self,
            TerminationCause::JustifiedDismissal | TerminationCause::VoluntaryResignation
        )
    }

    /// Numeric code used by existing settlement forms (1-5).
    pub fn code(&self) -> u8 {
        match self {
            TerminationCause::UnjustifiedDismissal => 1,
            TerminationCause::JustifiedDismissal => 2,
            TerminationCause::VoluntaryResignation => 3,
            TerminationCause::ResignationWithJustCause => 4,
            TerminationCause::PensionAward => 5,
        }
    }

    /// Looks a cause up by its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|cause| cause.code() == code)
    }

    /// Snake-case identifier, as used on the wire and in audit records.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationCause::UnjustifiedDismissal => "unjustified_dismissal",
            TerminationCause::JustifiedDismissal => "justified_dismissal",
            TerminationCause::VoluntaryResignation => "voluntary_resignation",
            TerminationCause::ResignationWithJustCause => "resignation_with_just_cause",
            TerminationCause::PensionAward => "pension_award",
        }
    }
}
