// Domain layer: menu types and the ports the session talks to. No I/O here.

pub mod model;
pub mod ports;
