// Domain layer: cart and catalog models plus the ports the app layer implements.

pub mod model;
pub mod ports;
