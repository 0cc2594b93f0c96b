//! Application layer. Controllers drive the core actions and hand finished
//! buffers to presenters through the ports defined here.

pub mod export;
pub mod ports;
