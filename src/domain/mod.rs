// Domain layer: event/response models and the handler port. No external dependencies beyond serde.

pub mod model;
pub mod ports;
