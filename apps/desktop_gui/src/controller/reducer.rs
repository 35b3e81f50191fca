//! Per-view state container for the flight list and its transitions.

use shared::{
    domain::{FlightId, FlightRecord},
    view::ViewControls,
};

use crate::controller::{
    events::{TableIntent, UiEvent},
    lifecycle::{MountId, MountLifecycle},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Requested,
    Loaded,
    Failed,
}

/// Everything the flight list view knows. Owned by one view instance.
#[derive(Debug, Default)]
pub struct FlightListState {
    raw: Vec<FlightRecord>,
    controls: ViewControls,
    lifecycle: MountLifecycle,
    phase: LoadPhase,
}

impl FlightListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the view active. Yields the id to load under only on the first
    /// call per mount.
    pub fn mount(&mut self) -> Option<MountId> {
        let mount = self.lifecycle.activate()?;
        self.phase = LoadPhase::Requested;
        Some(mount)
    }

    /// Drops everything the view held. A later `mount` starts from empty.
    pub fn teardown(&mut self) {
        if let Some(mount) = self.lifecycle.teardown() {
            tracing::debug!(mount = mount.0, "flight list view torn down");
        }
        self.raw.clear();
        self.controls = ViewControls::default();
        self.phase = LoadPhase::Idle;
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::FlightsLoaded { mount, flights } => {
                if !self.lifecycle.is_current(mount) {
                    tracing::debug!(mount = mount.0, "discarding flight list for stale mount");
                    return;
                }
                if self.phase == LoadPhase::Loaded {
                    tracing::debug!(mount = mount.0, "flight list already loaded; ignoring");
                    return;
                }
                self.raw = flights;
                self.phase = LoadPhase::Loaded;
            }
            UiEvent::LoadFailed { mount, failure } => {
                if !self.lifecycle.is_current(mount) {
                    return;
                }
                // Already reported at the loader boundary; rows stay as they were.
                tracing::debug!(mount = mount.0, kind = failure.kind(), "flight list unavailable");
                if self.phase != LoadPhase::Loaded {
                    self.phase = LoadPhase::Failed;
                }
            }
        }
    }

    pub fn apply(&mut self, intent: TableIntent) {
        match intent {
            TableIntent::SortByPrice => self.controls.sort_active = true,
            TableIntent::FilterChanged(text) => self.controls.filter_text = text,
            // Booking is handled outside the view state.
            TableIntent::Book(_) => {}
        }
    }

    pub fn rows(&self) -> Vec<&FlightRecord> {
        self.controls.rows(&self.raw)
    }

    pub fn flight(&self, id: &FlightId) -> Option<&FlightRecord> {
        self.raw.iter().find(|flight| &flight.id == id)
    }

    pub fn controls(&self) -> &ViewControls {
        &self.controls
    }

    pub fn total(&self) -> usize {
        self.raw.len()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
