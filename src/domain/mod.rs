// Domain layer: data the viewer moves around and the ports its outer layers implement.

pub mod model;
pub mod ports;
