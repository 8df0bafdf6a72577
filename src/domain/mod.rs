// Domain layer: lookup models and ports. No HTTP types cross this boundary.

pub mod model;
pub mod ports;
