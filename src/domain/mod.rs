// Domain layer: records and ports. No dependencies beyond std and the crate's error types.

pub mod model;
pub mod ports;
