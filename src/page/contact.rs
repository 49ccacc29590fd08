//! Simulated contact-form submission.
//!
//! The form never talks to a backend: a submit "delivers" after a fixed
//! delay and always succeeds, then an acknowledgement banner shows for a
//! fixed window. The machine hands those windows back as durations and the
//! host owns the actual timers, so everything here runs to completion within
//! one event turn. Only one delivery can be pending at a time because the
//! submit control is disabled while sending.

use std::time::Duration;

/// Delay before a submission counts as delivered.
pub const DELIVERY_DELAY: Duration = Duration::from_millis(1000);

/// How long the acknowledgement banner stays visible.
pub const ACK_WINDOW: Duration = Duration::from_secs(5);

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Ready for input; submit enabled.
    #[default]
    Idle,
    /// Delivery timer pending; submit disabled.
    Sending,
    /// Acknowledgement banner showing; form already reset.
    Acknowledged,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Whether the submit control accepts input.
    pub fn submit_enabled(&self) -> bool {
        self.phase != SubmitPhase::Sending
    }

    /// Whether the acknowledgement banner is showing.
    pub fn acknowledgement_visible(&self) -> bool {
        self.phase == SubmitPhase::Acknowledged
    }

    /// Start a submission. Returns the delivery delay for the host to
    /// schedule, or `None` when a delivery is already pending.
    pub fn submit(&mut self) -> Option<Duration> {
        match self.phase {
            SubmitPhase::Idle | SubmitPhase::Acknowledged => {
                self.phase = SubmitPhase::Sending;
                Some(DELIVERY_DELAY)
            }
            SubmitPhase::Sending => None,
        }
    }

    /// The delivery timer fired. Returns the acknowledgement window for the
    /// host to schedule; `None` when no delivery was pending.
    pub fn delivery_complete(&mut self) -> Option<Duration> {
        match self.phase {
            SubmitPhase::Sending => {
                self.phase = SubmitPhase::Acknowledged;
                Some(ACK_WINDOW)
            }
            SubmitPhase::Idle | SubmitPhase::Acknowledged => None,
        }
    }

    /// The acknowledgement window elapsed; hide the banner.
    pub fn acknowledgement_elapsed(&mut self) {
        if self.phase == SubmitPhase::Acknowledged {
            self.phase = SubmitPhase::Idle;
        }
    }
}
