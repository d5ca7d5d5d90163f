//! Observability subsystem.
//!
//! The library emits `tracing` events; the binary installs the subscriber.

pub mod logging;
