use std::time::Duration;

use crate::domain::{GenerationOutcome, ReleaseForm};
use crate::prompt::GenerationRequest;

/// How long a copy acknowledgement stays visible before the surface should
/// call `reset_copied`. The timer itself lives in the presentation layer.
pub const COPY_ACK_RESET: Duration = Duration::from_secs(2);

/// Mutable state behind one release-announcement editing session. Owned by a
/// single interactive surface; at most one generation attempt is outstanding
/// at any time because `begin_generation` refuses a second trigger.
#[derive(Debug, Default)]
pub struct SessionState {
    form: ReleaseForm,
    in_flight: bool,
    result: Option<GenerationOutcome>,
    copied: bool,
}

/// Observable lifecycle of the session, computed from the stored state.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionPhase<'a> {
    Idle,
    Generating,
    Completed(&'a GenerationOutcome),
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: ReleaseForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &ReleaseForm {
        &self.form
    }

    /// Field edits are allowed in every phase and never change the phase.
    pub fn form_mut(&mut self) -> &mut ReleaseForm {
        &mut self.form
    }

    pub fn can_generate(&self) -> bool {
        !self.in_flight && self.form.has_required_fields()
    }

    /// Starts an attempt and hands back the prompt snapshot to dispatch.
    /// Returns `None` while the trigger is unavailable (missing required
    /// fields or an attempt already in flight). An earlier outcome is kept so
    /// the surface can keep showing it during regeneration.
    pub fn begin_generation(&mut self) -> Option<GenerationRequest> {
        if !self.can_generate() {
            return None;
        }
        self.in_flight = true;
        Some(GenerationRequest::from_form(&self.form))
    }

    /// Records the attempt's single terminal outcome, replacing any earlier
    /// one, and re-opens the trigger.
    pub fn complete_generation(&mut self, outcome: GenerationOutcome) {
        self.result = Some(outcome);
        self.in_flight = false;
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight
    }

    pub fn outcome(&self) -> Option<&GenerationOutcome> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> SessionPhase<'_> {
        if self.in_flight {
            SessionPhase::Generating
        } else if let Some(outcome) = &self.result {
            SessionPhase::Completed(outcome)
        } else {
            SessionPhase::Idle
        }
    }

    /// Acknowledges that the current outcome was copied. Meaningless without
    /// an outcome, so it is ignored until one exists.
    pub fn mark_copied(&mut self) {
        if self.result.is_some() {
            self.copied = true;
        }
    }

    pub fn reset_copied(&mut self) {
        self.copied = false;
    }

    pub fn copied(&self) -> bool {
        self.copied
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn complete_form() -> ReleaseForm {
        ReleaseForm {
            release_date: NaiveDate::from_ymd_opt(2025, 9, 1),
            release_time: NaiveTime::from_hms_opt(14, 30, 0),
            ticket_details: "HER-101: Faster invoice exports".to_string(),
            ..ReleaseForm::default()
        }
    }

    #[test]
    fn gate_stays_closed_until_required_fields_arrive() {
        let mut session = SessionState::new();
        assert!(!session.can_generate());
        assert!(session.begin_generation().is_none());
        assert_eq!(session.phase(), SessionPhase::Idle);

        session.form_mut().release_date = NaiveDate::from_ymd_opt(2025, 9, 1);
        session.form_mut().release_time = NaiveTime::from_hms_opt(14, 30, 0);
        assert!(!session.can_generate());

        session.form_mut().ticket_details = "HER-101: Faster invoice exports".to_string();
        assert!(session.can_generate());
    }

    #[test]
    fn blank_ticket_details_do_not_open_the_gate() {
        let mut session = SessionState::with_form(complete_form());
        session.form_mut().ticket_details = "   \n".to_string();
        assert!(!session.can_generate());
    }

    #[test]
    fn begin_generation_snapshots_the_prompt() {
        let mut session = SessionState::with_form(complete_form());
        let request = session.begin_generation().unwrap();

        assert!(request.prompt().contains("HER-101: Faster invoice exports"));
        assert_eq!(session.phase(), SessionPhase::Generating);
        assert!(session.is_generating());
    }

    #[test]
    fn second_trigger_is_refused_while_generating() {
        let mut session = SessionState::with_form(complete_form());
        assert!(session.begin_generation().is_some());
        assert!(!session.can_generate());
        assert!(session.begin_generation().is_none());
    }

    #[test]
    fn completion_lands_in_a_displayable_phase() {
        let mut session = SessionState::with_form(complete_form());
        session.begin_generation().unwrap();
        session.complete_generation(GenerationOutcome::Message("Dear all,".to_string()));

        assert!(!session.is_generating());
        match session.phase() {
            SessionPhase::Completed(outcome) => assert_eq!(outcome.text(), "Dear all,"),
            other => panic!("unexpected phase: {other:?}"),
        }
    }

    #[test]
    fn completion_overwrites_the_previous_outcome() {
        let mut session = SessionState::with_form(complete_form());
        session.begin_generation().unwrap();
        session.complete_generation(GenerationOutcome::Failed("network error".to_string()));
        session.begin_generation().unwrap();
        session.complete_generation(GenerationOutcome::Message("second".to_string()));

        assert_eq!(
            session.outcome(),
            Some(&GenerationOutcome::Message("second".to_string()))
        );
    }

    #[test]
    fn stale_outcome_survives_a_regeneration_start() {
        let mut session = SessionState::with_form(complete_form());
        session.begin_generation().unwrap();
        session.complete_generation(GenerationOutcome::Message("first".to_string()));

        assert!(session.begin_generation().is_some());
        assert_eq!(session.phase(), SessionPhase::Generating);
        assert_eq!(
            session.outcome(),
            Some(&GenerationOutcome::Message("first".to_string()))
        );
    }

    #[test]
    fn edits_after_completion_keep_the_outcome_visible() {
        let mut session = SessionState::with_form(complete_form());
        session.begin_generation().unwrap();
        session.complete_generation(GenerationOutcome::Message("kept".to_string()));

        session.form_mut().ticket_details = "something else entirely".to_string();
        session.form_mut().release_date = NaiveDate::from_ymd_opt(2025, 12, 31);

        match session.phase() {
            SessionPhase::Completed(outcome) => assert_eq!(outcome.text(), "kept"),
            other => panic!("unexpected phase: {other:?}"),
        }
    }

    #[test]
    fn copied_flag_needs_an_outcome_and_resets_independently() {
        let mut session = SessionState::with_form(complete_form());
        session.mark_copied();
        assert!(!session.copied());

        session.begin_generation().unwrap();
        session.complete_generation(GenerationOutcome::Message("copy me".to_string()));
        session.mark_copied();
        assert!(session.copied());

        session.begin_generation().unwrap();
        assert!(session.copied());

        session.reset_copied();
        assert!(!session.copied());
    }
}
