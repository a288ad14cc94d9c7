// Domain layer: module records and the configuration-store port.

pub mod model;
pub mod ports;
