//! Mount bookkeeping for the flight list view.

/// Identifies one activation of the view. Results tagged with an older id
/// belong to a torn-down view and must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(pub u64);

#[derive(Debug, Default)]
pub struct MountLifecycle {
    next: u64,
    active: Option<MountId>,
}

impl MountLifecycle {
    /// Returns a fresh id on the inactive -> active transition only; calling
    /// it again while mounted yields `None`.
    pub fn activate(&mut self) -> Option<MountId> {
        if self.active.is_some() {
            return None;
        }
        let id = MountId(self.next);
        self.next += 1;
        self.active = Some(id);
        Some(id)
    }

    pub fn teardown(&mut self) -> Option<MountId> {
        self.active.take()
    }

    pub fn is_current(&self, id: MountId) -> bool {
        self.active == Some(id)
    }
}

#[cfg(test)]
#[path = "../tests/lifecycle_tests.rs"]
mod tests;
