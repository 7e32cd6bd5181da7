//! Explicit per-session state
//!
//! The presentation shell threads one [`PlannerSession`] through each
//! interaction instead of an ambient framework store. Fields and reset
//! semantics are enumerated so every transition is visible: a failed step
//! never corrupts the stored plan.

use std::path::PathBuf;

use domain::TravelPlan;
use serde::{Deserialize, Serialize};

/// Outcome of the most recent send attempt, as shown to the user
///
/// The message is the rendered, human-readable form; `accepted` preserves
/// the success/failure distinction without string scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOutcome {
    /// Whether the provider accepted the send
    pub accepted: bool,
    /// Human-readable outcome text
    pub message: String,
}

impl SendOutcome {
    /// A successful outcome
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            accepted: true,
            message: message.into(),
        }
    }

    /// A failed outcome
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            message: message.into(),
        }
    }
}

/// Mutable state for one user's planning session
#[derive(Debug, Clone, Default)]
pub struct PlannerSession {
    /// The current travel plan, if one has been generated
    plan: Option<TravelPlan>,
    /// Where the current plan is saved on disk
    document_path: Option<PathBuf>,
    /// Whether the email sub-form should be offered
    show_email_form: bool,
    /// Whether a send was attempted for the current state
    email_sent: bool,
    /// Outcome of the last send attempt, kept until reset
    last_outcome: Option<SendOutcome>,
}

impl PlannerSession {
    /// A fresh, empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a newly generated plan and its saved document
    ///
    /// Shows the email form and clears any previous send state; an outcome
    /// recorded against an older plan does not survive a new plan.
    pub fn apply_plan(&mut self, plan: TravelPlan, document_path: PathBuf) {
        self.plan = Some(plan);
        self.document_path = Some(document_path);
        self.show_email_form = true;
        self.email_sent = false;
        self.last_outcome = None;
    }

    /// Record the outcome of a send attempt
    pub fn record_outcome(&mut self, outcome: SendOutcome) {
        self.email_sent = true;
        self.last_outcome = Some(outcome);
    }

    /// "Send another email": clear send state but keep the plan
    pub fn reset_email(&mut self) {
        self.email_sent = false;
        self.last_outcome = None;
    }

    /// "New plan": clear everything
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a plan is currently held
    pub fn has_plan(&self) -> bool {
        self.plan.is_some()
    }

    /// The current plan, if any
    pub fn plan(&self) -> Option<&TravelPlan> {
        self.plan.as_ref()
    }

    /// Path of the saved document, if any
    pub fn document_path(&self) -> Option<&PathBuf> {
        self.document_path.as_ref()
    }

    /// Whether the email sub-form should be offered
    pub fn show_email_form(&self) -> bool {
        self.show_email_form
    }

    /// Whether a send was attempted for the current state
    pub fn email_sent(&self) -> bool {
        self.email_sent
    }

    /// Outcome of the last send attempt, if any
    pub fn last_outcome(&self) -> Option<&SendOutcome> {
        self.last_outcome.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> TravelPlan {
        TravelPlan::new("Day 1: Louvre").unwrap()
    }

    #[test]
    fn new_session_is_empty() {
        let session = PlannerSession::new();
        assert!(!session.has_plan());
        assert!(session.document_path().is_none());
        assert!(!session.show_email_form());
        assert!(!session.email_sent());
        assert!(session.last_outcome().is_none());
    }

    #[test]
    fn apply_plan_shows_email_form_and_clears_send_state() {
        let mut session = PlannerSession::new();
        session.record_outcome(SendOutcome::failed("Failed to send email: boom"));

        session.apply_plan(plan(), PathBuf::from("documents/plan.md"));

        assert!(session.has_plan());
        assert_eq!(
            session.document_path(),
            Some(&PathBuf::from("documents/plan.md"))
        );
        assert!(session.show_email_form());
        assert!(!session.email_sent());
        assert!(session.last_outcome().is_none());
    }

    #[test]
    fn record_outcome_marks_email_sent() {
        let mut session = PlannerSession::new();
        session.apply_plan(plan(), PathBuf::from("plan.md"));
        session.record_outcome(SendOutcome::accepted(
            "Email sent successfully to a@b.com (status 202)",
        ));

        assert!(session.email_sent());
        let outcome = session.last_outcome().unwrap();
        assert!(outcome.accepted);
        assert!(outcome.message.contains("202"));
    }

    #[test]
    fn failed_send_keeps_the_plan_intact() {
        let mut session = PlannerSession::new();
        session.apply_plan(plan(), PathBuf::from("plan.md"));
        session.record_outcome(SendOutcome::failed("Failed to send email: timeout"));

        assert!(session.has_plan());
        assert_eq!(session.plan().unwrap().content(), "Day 1: Louvre");
    }

    #[test]
    fn reset_email_keeps_plan_but_clears_outcome() {
        let mut session = PlannerSession::new();
        session.apply_plan(plan(), PathBuf::from("plan.md"));
        session.record_outcome(SendOutcome::accepted("ok"));

        session.reset_email();

        assert!(session.has_plan());
        assert!(session.show_email_form());
        assert!(!session.email_sent());
        assert!(session.last_outcome().is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = PlannerSession::new();
        session.apply_plan(plan(), PathBuf::from("plan.md"));
        session.record_outcome(SendOutcome::accepted("ok"));

        session.reset();

        assert!(!session.has_plan());
        assert!(session.document_path().is_none());
        assert!(!session.show_email_form());
        assert!(!session.email_sent());
        assert!(session.last_outcome().is_none());
    }

    #[test]
    fn replacing_the_plan_uses_the_new_document_path() {
        let mut session = PlannerSession::new();
        session.apply_plan(plan(), PathBuf::from("first.md"));
        session.apply_plan(
            TravelPlan::new("Day 1: Prado").unwrap(),
            PathBuf::from("second.md"),
        );

        assert_eq!(session.document_path(), Some(&PathBuf::from("second.md")));
        assert_eq!(session.plan().unwrap().content(), "Day 1: Prado");
    }

    #[test]
    fn send_outcome_constructors() {
        assert!(SendOutcome::accepted("ok").accepted);
        assert!(!SendOutcome::failed("no").accepted);
    }
}
