//! Bridge between the egui thread and the async worker that talks to the network.

pub mod commands;
pub mod runtime;
