//! File presenters that encode a finished pixel buffer to disk.

pub mod png;
pub mod ppm;
