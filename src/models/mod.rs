pub mod case;
pub mod event;

pub use case::*;
pub use event::*;

#[cfg(test)]
#[path = "event_tests.rs"]
mod event_tests;
