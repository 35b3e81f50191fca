//! Controller layer: UI events, view lifecycle, reducer-like state transitions, and command orchestration.

pub mod events;
pub mod lifecycle;
pub mod orchestration;
pub mod reducer;
