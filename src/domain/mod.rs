// Domain layer: record models, the affiliation filter and the pipeline ports.

pub mod filter;
pub mod model;
pub mod ports;
