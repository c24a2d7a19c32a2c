//! Contact form lifecycle: `Idle → Submitting → Success | Error`.
//!
//! The form never talks to the network itself. [`ContactForm::begin_submit`]
//! hands out a ticket, the caller performs the request and feeds the reply
//! back through [`ContactForm::finish_submit`]. Every ticket carries the
//! generation it was issued in; closing the form starts a new generation so
//! replies and timers from before the close are dropped.

use std::time::Duration;

use shared::{
    domain::{ContactField, SUCCESS_DISPLAY},
    protocol::ContactPayload,
};

use crate::transport::{Accepted, TransportError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload::new(&self.name, &self.email, &self.message)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionReply {
    Accepted,
    Failed(String),
}

impl From<&Result<Accepted, TransportError>> for SubmissionReply {
    fn from(value: &Result<Accepted, TransportError>) -> Self {
        match value {
            Ok(_) => Self::Accepted,
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub generation: u64,
    pub draft: ContactDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEffect {
    CloseAfter(Duration),
}

#[derive(Debug, Default)]
pub struct ContactForm {
    open: bool,
    status: FormStatus,
    draft: ContactDraft,
    in_flight: bool,
    generation: u64,
    last_error: Option<String>,
}

impl ContactForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.open && !self.in_flight && self.status != FormStatus::Success
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if !self.can_submit() {
            return None;
        }
        self.in_flight = true;
        self.status = FormStatus::Submitting;
        self.last_error = None;
        Some(SubmitTicket {
            generation: self.generation,
            draft: self.draft.clone(),
        })
    }

    /// Applies the reply for a ticket. Returns `None` for stale replies and
    /// for failures.
    pub fn finish_submit(&mut self, generation: u64, reply: SubmissionReply) -> Option<FormEffect> {
        if generation != self.generation || !self.in_flight {
            tracing::debug!(generation, current = self.generation, "dropping stale reply");
            return None;
        }
        self.in_flight = false;
        match reply {
            SubmissionReply::Accepted => {
                self.status = FormStatus::Success;
                self.draft = ContactDraft::default();
                Some(FormEffect::CloseAfter(SUCCESS_DISPLAY))
            }
            SubmissionReply::Failed(reason) => {
                self.status = FormStatus::Error;
                self.last_error = Some(reason);
                None
            }
        }
    }

    /// Returns true when the success banner timer closed the form.
    pub fn success_display_elapsed(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.status != FormStatus::Success {
            return false;
        }
        self.reset();
        true
    }

    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.open = false;
        self.status = FormStatus::Idle;
        self.draft = ContactDraft::default();
        self.in_flight = false;
        self.last_error = None;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.open();
        form.edit(ContactField::Name, "A");
        form.edit(ContactField::Email, "a@b.com");
        form.edit(ContactField::Message, "hi");
        form
    }

    #[test]
    fn submit_is_single_flight() {
        let mut form = filled_form();
        let ticket = form.begin_submit().expect("first submit");
        assert_eq!(ticket.draft.name, "A");
        assert_eq!(form.status(), FormStatus::Submitting);
        assert!(!form.can_submit());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn closed_form_cannot_submit() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn accepted_reply_clears_draft_and_schedules_close() {
        let mut form = filled_form();
        let ticket = form.begin_submit().expect("submit");

        let effect = form.finish_submit(ticket.generation, SubmissionReply::Accepted);
        assert_eq!(effect, Some(FormEffect::CloseAfter(Duration::from_secs(2))));
        assert_eq!(form.status(), FormStatus::Success);
        assert!(form.draft().is_empty());
        assert!(form.is_open());
        assert!(!form.can_submit());

        assert!(form.success_display_elapsed(ticket.generation));
        assert!(!form.is_open());
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn failed_reply_keeps_draft_for_retry() {
        let mut form = filled_form();
        let ticket = form.begin_submit().expect("submit");

        let effect = form.finish_submit(ticket.generation, SubmissionReply::Failed("500".into()));
        assert_eq!(effect, None);
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.last_error(), Some("500"));
        assert_eq!(form.draft().email, "a@b.com");

        let retry = form.begin_submit().expect("retry allowed");
        assert_eq!(retry.draft, ticket.draft);
        assert_eq!(form.last_error(), None);
    }

    #[test]
    fn close_resets_from_every_state() {
        let mut form = filled_form();
        form.close();
        assert!(form.draft().is_empty());
        assert_eq!(form.status(), FormStatus::Idle);

        let mut form = filled_form();
        let ticket = form.begin_submit().expect("submit");
        form.close();
        assert!(form.draft().is_empty());
        assert!(!form.is_in_flight());
        assert_eq!(form.finish_submit(ticket.generation, SubmissionReply::Accepted), None);
        assert_eq!(form.status(), FormStatus::Idle);

        let mut form = filled_form();
        let ticket = form.begin_submit().expect("submit");
        form.finish_submit(ticket.generation, SubmissionReply::Failed("offline".into()));
        form.close();
        assert_eq!(form.status(), FormStatus::Idle);
        assert!(form.draft().is_empty());
    }

    #[test]
    fn success_timer_from_previous_session_is_ignored() {
        let mut form = filled_form();
        let ticket = form.begin_submit().expect("submit");
        form.finish_submit(ticket.generation, SubmissionReply::Accepted);
        form.close();
        form.open();

        assert!(!form.success_display_elapsed(ticket.generation));
        assert!(form.is_open());
    }

    #[test]
    fn edits_during_flight_do_not_change_ticket() {
        let mut form = filled_form();
        let ticket = form.begin_submit().expect("submit");
        form.edit(ContactField::Message, "changed");
        assert_eq!(ticket.draft.message, "hi");
        assert_eq!(form.draft().message, "changed");
    }
}
