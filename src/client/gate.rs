//! Request gate: at most one submission in flight per composer.

use crate::ui::Surface;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub const SEND_LABEL: &str = "Send";
pub const SENDING_LABEL: &str = "Sending...";

/// What the submit control should look like right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub enabled: bool,
    pub label: &'static str,
}

impl ControlState {
    pub const IDLE: Self = Self {
        enabled: true,
        label: SEND_LABEL,
    };
    pub const BUSY: Self = Self {
        enabled: false,
        label: SENDING_LABEL,
    };
}

pub struct RequestGate {
    in_flight: AtomicBool,
    surface: Arc<dyn Surface>,
}

impl RequestGate {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self {
            in_flight: AtomicBool::new(false),
            surface,
        }
    }

    /// Engage the gate. Returns `false` (and changes nothing) when a
    /// submission is already outstanding.
    pub fn begin(&self) -> bool {
        let engaged = self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if engaged {
            self.surface.control_changed(ControlState::BUSY);
        }
        engaged
    }

    /// Release the gate. Idempotent.
    pub fn end(&self) {
        if self.in_flight.swap(false, Ordering::AcqRel) {
            self.surface.control_changed(ControlState::IDLE);
        }
    }

    /// Scope-bound variant of [`begin`](Self::begin): the returned guard
    /// calls [`end`](Self::end) when dropped, on every exit path.
    pub fn engage(&self) -> Option<GateGuard<'_>> {
        self.begin().then_some(GateGuard { gate: self })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn control(&self) -> ControlState {
        if self.is_busy() {
            ControlState::BUSY
        } else {
            ControlState::IDLE
        }
    }
}

#[must_use = "the gate is released as soon as the guard is dropped"]
pub struct GateGuard<'a> {
    gate: &'a RequestGate,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.gate.end();
    }
}
