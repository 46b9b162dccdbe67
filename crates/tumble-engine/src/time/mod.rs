//! Time subsystem.
//!
//! Provides a fixed-interval `Ticker` that the runtime polls from its event loop.
//! Intended usage:
//! - the owner calls `start()` once and `poll()` whenever the loop wakes up
//! - the loop sleeps until `deadline()`
//! - `cancel()` (or dropping the owner) stops further ticks

mod ticker;

pub use ticker::Ticker;
