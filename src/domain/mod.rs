// Domain layer: core models and ports (interfaces). No network or IO here.

pub mod model;
pub mod ports;
