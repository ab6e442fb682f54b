#![forbid(unsafe_code)]

//! Core: host signals and the logging facade shared by rux crates.

pub mod event;
pub mod logging;

pub use event::HostSignal;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};
