//! Domain layer: money value objects, the breakdown calculator and the
//! escrow status model.

pub mod breakdown;
pub mod lifecycle;
pub mod money;
pub mod payment;
pub mod ports;
pub mod status;
