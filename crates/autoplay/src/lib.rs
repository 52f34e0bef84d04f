//! Autoplay: drives a world forward on a timer and hands each rendered
//! generation to a sink.
//!
//! # Invariants
//! - A stop request is honoured only between complete generations; the
//!   world is never observed mid-advance.
//! - With a generation limit `n`, exactly `n` frames are emitted (zero for
//!   `n = 0`).

mod config;
mod driver;
mod sink;
mod stop;
mod timer;

pub use config::AutoplayConfig;
pub use driver::{AutoplayError, AutoplayStats, play, run};
pub use sink::{FrameSink, WriterSink};
pub use stop::StopFlag;
pub use timer::AdvanceTimer;

pub fn crate_info() -> &'static str {
    "toruslife-autoplay v0.1.0"
}
