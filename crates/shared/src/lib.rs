//! Domain model, view derivation and error types shared by the flight client and the GUI.

pub mod domain;
pub mod error;
pub mod view;
