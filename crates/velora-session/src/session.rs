//! Edit/validate/save lifecycle for an earner's call rates.
//!
//! The session moves `Editing -> Validating -> Saved | Rejected`. Every
//! transition is driven by a single user interaction; the only asynchronous
//! step is the persistence call, which the caller awaits between
//! [`RateEditSession::begin_save`] and [`RateEditSession::mark_saved`] /
//! [`RateEditSession::mark_save_failed`]. A failed or rejected save keeps
//! the draft so the earner can adjust and retry; navigating away just drops
//! the session (or calls [`RateEditSession::discard`]) with no persisted
//! side effect.

use serde::{Deserialize, Serialize};

use velora_pricing::clamp::clamp_rate;
use velora_pricing::policy::PricingPolicy;
use velora_pricing::validate::validate_rate_set;
use velora_types::calls::CallDuration;
use velora_types::rates::{ClampCorrection, RateSet};
use velora_types::Credits;

use crate::{Result, SessionError};

/// Where an edit session currently is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Accepting edits.
    Editing,
    /// Save requested; the set is being validated / persisted.
    Validating,
    /// The draft was persisted and is now the baseline.
    Saved,
    /// Validation or persistence failed; the draft is kept for retry.
    Rejected { reason: String },
}

/// An in-memory edit session over one profile's rate set.
#[derive(Clone, Debug)]
pub struct RateEditSession {
    policy: PricingPolicy,
    /// The last persisted rates.
    original: RateSet,
    draft: RateSet,
    state: SessionState,
}

impl RateEditSession {
    /// Start a session from the currently persisted rates.
    pub fn new(policy: PricingPolicy, current: RateSet) -> Self {
        Self {
            policy,
            original: current,
            draft: current,
            state: SessionState::Editing,
        }
    }

    /// The current draft rates.
    pub fn draft(&self) -> &RateSet {
        &self.draft
    }

    /// The current lifecycle state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether the draft differs from the last persisted rates.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Apply one edit, clamping it into the currently valid range.
    ///
    /// Returns the correction when the value had to be adjusted; the UI
    /// surfaces it as an informational notice. Any edit returns the session
    /// to `Editing`, including after a rejected save.
    ///
    /// # Errors
    ///
    /// [`SessionError::SaveInFlight`] while a save is being validated or
    /// persisted (the UI disables editing for that window).
    pub fn edit(
        &mut self,
        duration: CallDuration,
        proposed: Credits,
    ) -> Result<Option<ClampCorrection>> {
        if self.state == SessionState::Validating {
            return Err(SessionError::SaveInFlight);
        }
        self.state = SessionState::Editing;

        let clamped = clamp_rate(&self.policy, &self.draft, duration, proposed);
        self.draft.set_rate(duration, clamped.value);
        Ok(clamped.correction)
    }

    /// Validate the full draft and move to `Validating`.
    ///
    /// On success the returned set is what the caller persists (all four
    /// values in one update); on failure the session moves to `Rejected`
    /// with the validator's reason and nothing may be persisted.
    ///
    /// # Errors
    ///
    /// - [`SessionError::SaveInFlight`] if a save is already in flight
    /// - [`SessionError::Pricing`] when the draft is invalid
    pub fn begin_save(&mut self) -> Result<RateSet> {
        if self.state == SessionState::Validating {
            return Err(SessionError::SaveInFlight);
        }
        self.state = SessionState::Validating;

        match validate_rate_set(&self.policy, &self.draft) {
            Ok(()) => Ok(self.draft),
            Err(e) => {
                tracing::debug!(reason = %e, "rate save rejected");
                self.state = SessionState::Rejected {
                    reason: e.to_string(),
                };
                Err(e.into())
            }
        }
    }

    /// Record a successful persistence: the draft becomes the baseline.
    pub fn mark_saved(&mut self) {
        self.original = self.draft;
        self.state = SessionState::Saved;
    }

    /// Record a failed persistence. The draft is kept for manual retry.
    pub fn mark_save_failed(&mut self, reason: impl Into<String>) {
        self.state = SessionState::Rejected {
            reason: reason.into(),
        };
    }

    /// Revert the draft to the last persisted rates.
    pub fn discard(&mut self) {
        self.draft = self.original;
        self.state = SessionState::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velora_pricing::policy::DEFAULT_POLICY;
    use velora_types::rates::DEFAULT_RATES;

    fn session() -> RateEditSession {
        RateEditSession::new(DEFAULT_POLICY, DEFAULT_RATES)
    }

    #[test]
    fn test_clean_session() {
        let s = session();
        assert_eq!(*s.state(), SessionState::Editing);
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_edit_applies_and_dirties() {
        let mut s = session();
        let correction = s.edit(CallDuration::Min60, 550).expect("edit");
        assert!(correction.is_none());
        assert_eq!(s.draft().video_60, 550);
        assert!(s.is_dirty());
    }

    #[test]
    fn test_edit_below_floor_is_corrected() {
        let mut s = session();
        let correction = s
            .edit(CallDuration::Min30, 50)
            .expect("edit")
            .expect("correction");
        assert_eq!(correction.applied, 250);
        assert_eq!(s.draft().video_30, 250);
    }

    #[test]
    fn test_save_roundtrip() {
        let mut s = session();
        s.edit(CallDuration::Min90, 800).expect("edit");
        let validated = s.begin_save().expect("valid");
        assert_eq!(validated.video_90, 800);
        assert_eq!(*s.state(), SessionState::Validating);

        s.mark_saved();
        assert_eq!(*s.state(), SessionState::Saved);
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_no_edits_while_save_in_flight() {
        let mut s = session();
        s.begin_save().expect("valid");
        assert!(matches!(
            s.edit(CallDuration::Min15, 300),
            Err(SessionError::SaveInFlight)
        ));
        assert!(matches!(s.begin_save(), Err(SessionError::SaveInFlight)));
    }

    #[test]
    fn test_rejected_save_keeps_draft_and_recovers() {
        let mut s = session();
        // Clamped edits keep each single change consistent, so force an
        // inconsistent draft the way a stale client would: raise the
        // 15-minute rate after the others were already low.
        s.edit(CallDuration::Min15, 900).expect("edit");
        let err = s.begin_save().expect_err("inconsistent set");
        assert!(matches!(err, SessionError::Pricing(_)));
        assert!(matches!(s.state(), SessionState::Rejected { .. }));
        // Draft survives and the next edit returns to Editing.
        assert_eq!(s.draft().video_15, 900);
        s.edit(CallDuration::Min30, 900).expect("edit after reject");
        assert_eq!(*s.state(), SessionState::Editing);
    }

    #[test]
    fn test_persistence_failure_keeps_draft() {
        let mut s = session();
        s.edit(CallDuration::Min60, 550).expect("edit");
        s.begin_save().expect("valid");
        s.mark_save_failed("connection lost");
        assert!(matches!(s.state(), SessionState::Rejected { .. }));
        assert_eq!(s.draft().video_60, 550);
        assert!(s.is_dirty());
    }

    #[test]
    fn test_discard_reverts() {
        let mut s = session();
        s.edit(CallDuration::Min60, 550).expect("edit");
        s.discard();
        assert!(!s.is_dirty());
        assert_eq!(*s.draft(), DEFAULT_RATES);
    }
}
