//! Repository layer
//!
//! Narrow async interfaces over the two external services. The poll loop
//! only sees these traits, so a cycle can be driven against in-memory
//! fakes in tests.

mod homework;
mod notifier;

pub use homework::HomeworkRepository;
pub use notifier::Notifier;
