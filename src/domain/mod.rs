// Domain layer: models, ports and the pure services built on them.

pub mod model;
pub mod normalize;
pub mod ports;
pub mod services;
pub mod stats;
