//! Recording surface.

use std::convert::Infallible;

use vestibule_app::{Slot, Surface, WelcomeFrame};
use vestibule_core::Fragment;

/// One observed surface operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    /// Presentation marker applied with this title.
    Acquired {
        /// Document title that was set.
        title: String,
    },

    /// Presentation marker removed.
    Released,

    /// Fragment cloned into a mount point.
    Injected {
        /// Target mount point.
        slot: Slot,
        /// Markup that was cloned.
        markup: String,
    },

    /// Join delegated with this room name.
    Joined {
        /// Room name passed to the join collaborator.
        room: String,
    },

    /// A frame was rendered.
    Rendered,
}

/// Surface double that records every call for assertion.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    last_frame: Option<WelcomeFrame>,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All observed calls, in order.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// How many times the given slot was injected.
    pub fn injection_count(&self, slot: Slot) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Injected { slot: s, .. } if *s == slot))
            .count()
    }

    /// Room names passed to the join collaborator, in order.
    pub fn joins(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Joined { room } => Some(room.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The most recently rendered frame. `None` before the first render.
    pub fn last_frame(&self) -> Option<&WelcomeFrame> {
        self.last_frame.as_ref()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn acquire_presentation(&mut self, title: &str) -> Result<(), Self::Error> {
        self.calls.push(SurfaceCall::Acquired { title: title.to_owned() });
        Ok(())
    }

    fn release_presentation(&mut self) -> Result<(), Self::Error> {
        self.calls.push(SurfaceCall::Released);
        Ok(())
    }

    fn inject(&mut self, slot: Slot, fragment: &Fragment) -> Result<(), Self::Error> {
        self.calls.push(SurfaceCall::Injected { slot, markup: fragment.markup().to_owned() });
        Ok(())
    }

    fn join(&mut self, room: &str) -> Result<(), Self::Error> {
        self.calls.push(SurfaceCall::Joined { room: room.to_owned() });
        Ok(())
    }

    fn render(&mut self, frame: &WelcomeFrame) -> Result<(), Self::Error> {
        self.calls.push(SurfaceCall::Rendered);
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
