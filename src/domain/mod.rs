// Domain layer: entity records, arena indices and the traits shared across the crate.

pub mod idx;
pub mod model;
pub mod ports;
