//! Landing page state owned by the UI thread.
//!
//! Timer tasks and in-flight submissions never touch the view directly; they
//! post [`ViewEvent`]s on one queue which the UI drains with
//! [`LandingView::pump`] every frame.

use std::sync::Arc;

use shared::domain::{ContactField, DisplayMode, Section, SequenceStep};
use tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{
    form::{ContactForm, FormEffect, SubmissionReply},
    sequencer::{Cue, Sequencer, TimerSet},
    transport::ContactTransport,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Cue(Cue),
    SubmissionFinished {
        generation: u64,
        reply: SubmissionReply,
    },
    SuccessDisplayElapsed {
        generation: u64,
    },
}

pub struct LandingView {
    transport: Arc<dyn ContactTransport>,
    runtime: Handle,
    events_tx: UnboundedSender<ViewEvent>,
    events_rx: UnboundedReceiver<ViewEvent>,
    timers: Option<TimerSet>,
    reveal_step: SequenceStep,
    display_mode: DisplayMode,
    scroll_target: Option<Section>,
    current_section: Section,
    auto_scrolls: usize,
    form: ContactForm,
    close_timer: Option<JoinHandle<()>>,
    torn_down: bool,
}

impl LandingView {
    pub fn new(transport: Arc<dyn ContactTransport>, runtime: Handle) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            transport,
            runtime,
            events_tx,
            events_rx,
            timers: None,
            reveal_step: SequenceStep::Blank,
            display_mode: DisplayMode::default(),
            scroll_target: None,
            current_section: Section::Intro,
            auto_scrolls: 0,
            form: ContactForm::default(),
            close_timer: None,
            torn_down: false,
        }
    }

    /// Starts the reveal schedule. Only the first call has any effect.
    pub fn load(&mut self) {
        if self.timers.is_some() || self.torn_down {
            return;
        }
        let tx = self.events_tx.clone();
        self.timers = Some(Sequencer::start(&self.runtime, move |cue| {
            let _ = tx.send(ViewEvent::Cue(cue));
        }));
        info!("landing page loaded");
    }

    /// Cancels every pending timer. Events already queued are discarded.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        if let Some(mut timers) = self.timers.take() {
            timers.cancel();
        }
        if let Some(close_timer) = self.close_timer.take() {
            close_timer.abort();
        }
        while self.events_rx.try_recv().is_ok() {}
        debug!("landing page torn down");
    }

    pub fn reveal_step(&self) -> SequenceStep {
        self.reveal_step
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn current_section(&self) -> Section {
        self.current_section
    }

    pub fn auto_scrolls(&self) -> usize {
        self.auto_scrolls
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.as_ref().map_or(0, TimerSet::pending)
    }

    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
    }

    /// Section the renderer should scroll to, consumed once.
    pub fn take_scroll_target(&mut self) -> Option<Section> {
        self.scroll_target.take()
    }

    pub fn user_scrolled_to(&mut self, section: Section) {
        self.current_section = section;
    }

    pub fn open_contact(&mut self) {
        self.form.open();
    }

    pub fn close_contact(&mut self) {
        if let Some(close_timer) = self.close_timer.take() {
            close_timer.abort();
        }
        self.form.close();
    }

    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.edit(field, value);
    }

    /// Sends the current draft unless a submission is already running.
    /// Returns whether a request was started.
    pub fn submit(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(ticket) = self.form.begin_submit() else {
            return false;
        };
        let transport = Arc::clone(&self.transport);
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = transport.submit(&ticket.draft).await;
            if let Err(err) = &result {
                warn!(error = %err, "contact submission failed");
            }
            let _ = tx.send(ViewEvent::SubmissionFinished {
                generation: ticket.generation,
                reply: SubmissionReply::from(&result),
            });
        });
        true
    }

    pub fn apply(&mut self, event: ViewEvent) {
        if self.torn_down {
            return;
        }
        match event {
            ViewEvent::Cue(cue) => self.apply_cue(cue),
            ViewEvent::SubmissionFinished { generation, reply } => {
                if let Some(FormEffect::CloseAfter(delay)) =
                    self.form.finish_submit(generation, reply)
                {
                    let tx = self.events_tx.clone();
                    let generation = self.form.generation();
                    self.close_timer = Some(self.runtime.spawn(async move {
                        tokio::time::sleep(delay).await;
                        let _ = tx.send(ViewEvent::SuccessDisplayElapsed { generation });
                    }));
                }
            }
            ViewEvent::SuccessDisplayElapsed { generation } => {
                if self.form.success_display_elapsed(generation) {
                    self.close_timer = None;
                }
            }
        }
    }

    /// Applies every queued event without blocking. Returns how many were
    /// applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    pub async fn next_event(&mut self) -> Option<ViewEvent> {
        self.events_rx.recv().await
    }

    pub async fn process_next(&mut self) -> Option<ViewEvent> {
        let event = self.next_event().await?;
        self.apply(event.clone());
        Some(event)
    }

    fn apply_cue(&mut self, cue: Cue) {
        if cue.step <= self.reveal_step {
            return;
        }
        self.reveal_step = cue.step;
        if let Some(section) = cue.scroll_to {
            self.scroll_target = Some(section);
            self.current_section = section;
            self.auto_scrolls += 1;
        }
    }
}

impl Drop for LandingView {
    fn drop(&mut self) {
        if let Some(close_timer) = self.close_timer.take() {
            close_timer.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
