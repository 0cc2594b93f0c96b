//! Domain layer: field data types, the Julia algorithm and the actions that
//! turn it into coloured pixels. Nothing in here knows about files or flags.

pub mod actions;
pub mod data;
pub mod fractals;
pub mod util;
