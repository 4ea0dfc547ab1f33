//! Utility functions

mod sink;

pub use sink::OutputSink;
