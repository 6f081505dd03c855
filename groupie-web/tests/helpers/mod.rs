//! Shared helpers for groupie-web integration tests

pub mod log_capture;
