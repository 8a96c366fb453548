// Domain layer: contact models, ports and the field mapping. No I/O here.

pub mod model;
pub mod ports;

pub mod services;
