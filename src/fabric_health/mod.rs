//! Domain layer: topology parsing, port arithmetic and down-link correlation.

pub mod domain;
pub mod services;
