//! Pure derivation of the displayed flight rows from the loaded collection
//! and the two table controls.

use crate::domain::FlightRecord;

/// The user-editable inputs of the flight table.
///
/// `sort_active` only ever moves from `false` to `true`; there is no control
/// that restores load order once prices have been sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewControls {
    pub filter_text: String,
    pub sort_active: bool,
}

impl ViewControls {
    pub fn rows<'a>(&self, raw: &'a [FlightRecord]) -> Vec<&'a FlightRecord> {
        derive_refs(raw, &self.filter_text, self.sort_active)
    }
}

/// Rows to display, in display order.
pub fn derive(raw: &[FlightRecord], filter_text: &str, sort_active: bool) -> Vec<FlightRecord> {
    derive_refs(raw, filter_text, sort_active)
        .into_iter()
        .cloned()
        .collect()
}

/// Borrowing form of [`derive`], used by the renderer every frame.
pub fn derive_refs<'a>(
    raw: &'a [FlightRecord],
    filter_text: &str,
    sort_active: bool,
) -> Vec<&'a FlightRecord> {
    let needle = filter_text.to_lowercase();
    let mut rows: Vec<&FlightRecord> = raw
        .iter()
        .filter(|flight| airline_matches(flight, &needle))
        .collect();

    if sort_active {
        // `sort_by` is stable, equal prices keep their filtered order.
        rows.sort_by(|a, b| a.price.total_cmp(&b.price));
    }

    rows
}

/// `needle` must already be lowercased.
fn airline_matches(flight: &FlightRecord, needle: &str) -> bool {
    needle.is_empty() || flight.airline.to_lowercase().contains(needle)
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
